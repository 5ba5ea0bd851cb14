//! Frame render pass
//!
//! Back to front: parallax background in screen space, then world-space
//! entities under the camera translation, then the status bars on top.

use super::RenderTarget;
use crate::sim::{Drawable, Rect, World};
use crate::sim::items::BackgroundLayer;

/// Draw one frame of `world`
pub fn render(world: &World, target: &mut dyn RenderTarget) {
    target.clear();

    for layer in &world.level.background {
        let rect = Rect::new(
            world.camera.parallax_x(layer.x, layer.factor),
            0.0,
            BackgroundLayer::WIDTH,
            BackgroundLayer::HEIGHT,
        );
        target.draw_image(layer.sprite, rect);
    }

    target.translate(world.camera.x, 0.0);

    for light in &world.level.lights {
        draw_entity(target, light);
    }
    draw_entity(target, &world.character);
    for barrier in &world.level.barriers {
        draw_entity(target, barrier);
    }
    for enemy in &world.level.enemies {
        draw_entity(target, enemy);
    }
    if let Some(boss) = &world.level.boss {
        draw_entity(target, boss);
    }
    for coin in &world.level.coins {
        draw_entity(target, coin);
    }
    for bottle in &world.level.bottles {
        draw_entity(target, bottle);
    }
    for bubble in &world.bubbles {
        draw_entity(target, bubble);
    }

    target.translate(-world.camera.x, 0.0);

    for bar in [&world.status_bottles, &world.status_life, &world.status_coins] {
        target.draw_image(bar.sprite(), bar.rect);
    }
}

fn draw_entity(target: &mut dyn RenderTarget, entity: &dyn Drawable) {
    let rect = entity.draw_rect();
    match entity.rotation() {
        Some(angle) => target.draw_image_rotated(entity.sprite(), rect, angle, entity.mirrored()),
        None if entity.mirrored() => target.draw_image_mirrored(entity.sprite(), rect),
        None => target.draw_image(entity.sprite(), rect),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, RecordingTarget};
    use crate::settings::Settings;
    use crate::sprites;

    fn frame(world: &World) -> RecordingTarget {
        let mut target = RecordingTarget::new();
        render(world, &mut target);
        target
    }

    #[test]
    fn test_translation_is_undone() {
        let mut world = World::new(3, &Settings::default()).unwrap();
        world.camera.follow(5000.0);
        let target = frame(&world);
        assert_eq!(target.commands[0], DrawCommand::Clear);
        assert_eq!(target.offset, (0.0, 0.0));
        let translations: Vec<_> = target
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Translate { .. }))
            .collect();
        assert_eq!(translations.len(), 2);
    }

    #[test]
    fn test_draw_order() {
        let world = World::new(3, &Settings::default()).unwrap();
        let target = frame(&world);
        let drawn: Vec<_> = target.commands.iter().filter_map(|c| c.sprite()).collect();

        let position = |wanted: &dyn Fn(&str) -> bool| drawn.iter().position(|s| wanted(s)).unwrap();
        let first_light = position(&|s| s == sprites::LIGHT_1);
        let character = position(&|s| sprites::CHARACTER_IDLE.contains(&s));
        let first_coin = position(&|s| sprites::COIN.contains(&s));
        assert!(first_light < character);
        assert!(character < first_coin);

        // Status bars come last: bottles, life, coins
        let n = drawn.len();
        assert_eq!(drawn[n - 3], world.status_bottles.sprite());
        assert_eq!(drawn[n - 2], world.status_life.sprite());
        assert_eq!(drawn[n - 1], world.status_coins.sprite());
    }

    #[test]
    fn test_parallax_layers_scroll_by_factor() {
        let mut world = World::new(3, &Settings::default()).unwrap();
        world.camera.follow(1220.0);
        let target = frame(&world);
        let DrawCommand::Image { rect, .. } = target.commands[1] else {
            panic!("expected a background blit");
        };
        let layer = world.level.background[0];
        assert_eq!(rect.x, layer.x + world.camera.x * layer.factor);
    }

    #[test]
    fn test_character_drawn_rotated() {
        let mut world = World::new(3, &Settings::default()).unwrap();
        world.character.facing_left = true;
        let target = frame(&world);
        let rotated = target.commands.iter().find(|c| {
            matches!(c, DrawCommand::Rotated { sprite, .. } if sprites::CHARACTER_IDLE.contains(sprite))
        });
        assert!(matches!(rotated, Some(DrawCommand::Rotated { mirrored: true, .. })));
    }
}
