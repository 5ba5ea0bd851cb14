//! Simulation tick
//!
//! Each call advances the world by one fixed step. Movement and animation run
//! every step; collisions, combat and pickups are resolved on their own slower
//! cadence by [`resolve_interactions`].

use super::character::{CharacterOutcome, Permissions};
use super::entity::{Foe, Hostile};
use super::items::Bubble;
use super::state::{AudioCue, GameEvent, GamePhase, World};
use crate::audio::Sound;
use crate::consts::{BOSS_TRIGGER_X, GAME_OVER_DELAY_MS};
use crate::platform::Keyboard;
use crate::sim::endboss::MoveDirection;

/// Advance the world by `dt` milliseconds
pub fn tick(world: &mut World, keyboard: &Keyboard, dt: f32) {
    if world.phase.is_over() {
        return;
    }
    world.time_ms += dt as f64;
    let now = world.time_ms;

    let outcome = world.character.update(
        dt,
        now,
        keyboard,
        &world.level.barriers,
        &world.level.bounds,
        &mut world.events,
    );
    apply_character_outcome(world, outcome);
    world.camera.follow(world.character.body.pos.x);

    update_enemies(world, dt);
    update_boss(world, dt);
    update_bubbles(world, dt);

    for light in &mut world.level.lights {
        light.update(dt);
    }
    if world.pickup_clock.tick(dt) {
        for coin in &mut world.level.coins {
            coin.animate();
        }
        for bottle in &mut world.level.bottles {
            bottle.animate();
        }
    }

    world.combat_elapsed += dt;
    if world.combat_elapsed >= world.combat_interval {
        world.combat_elapsed -= world.combat_interval;
        resolve_interactions(world, keyboard);
    }

    check_game_over(world);
}

fn apply_character_outcome(world: &mut World, outcome: CharacterOutcome) {
    if let Some(damage) = outcome.attack_damage {
        world.attack_damage = damage;
    }
    if outcome.finishing_slap {
        finish_slap(world);
    }
    if let Some(launch) = outcome.launch {
        // Only one bubble flies at a time
        if world.bubbles.iter().any(|b| b.active) {
            world.cue(AudioCue::Pause(Sound::BubbleAttack));
        }
        world.bubbles.clear();
        world
            .bubbles
            .push(Bubble::new(launch.x, launch.y, launch.speed, launch.kind));
        world.cue(AudioCue::Play(Sound::BubbleAttack));
        world.status_bottles.set_percentage(world.character.bottles as i32);
        log::debug!("{:?} bubble launched at ({:.0}, {:.0})", launch.kind, launch.x, launch.y);
    }
}

/// Land the finishing slap frame on every pufferfish in reach
fn finish_slap(world: &mut World) {
    let now = world.time_ms;
    let World {
        character,
        level,
        events,
        ..
    } = world;
    for enemy in &mut level.enemies {
        if enemy.dying || !character.body.is_colliding(&enemy.body) {
            continue;
        }
        if character.finishing_strike(&mut *enemy, now) {
            character.execute_attack = true;
            kill_check(enemy, events);
        }
    }
}

fn update_enemies(world: &mut World, dt: f32) {
    let rng = &mut world.rng;
    let before = world.level.enemies.len();
    world.level.enemies.retain_mut(|enemy| !enemy.update(dt, rng));
    if world.level.enemies.len() < before {
        world.character.execute_attack = false;
    }
}

fn update_boss(world: &mut World, dt: f32) {
    let finished = world
        .level
        .boss
        .as_mut()
        .is_some_and(|boss| boss.update(dt, &mut world.rng, &mut world.events));
    if !finished {
        return;
    }
    world.level.boss = None;
    if world.phase == GamePhase::Playing {
        let coins = world.character.coins;
        log::info!("Victory with {} coins", coins);
        world.phase = GamePhase::Won;
        world.cue(AudioCue::StopMusic);
        world.cue(AudioCue::Play(Sound::WinningMusic));
        world.emit(GameEvent::Victory { coins });
    }
}

fn update_bubbles(world: &mut World, dt: f32) {
    let mut expired = 0;
    for bubble in &mut world.bubbles {
        if bubble.update(dt) {
            expired += 1;
        }
    }
    for _ in 0..expired {
        world.cue(AudioCue::Pause(Sound::BubbleAttack));
    }
}

fn check_game_over(world: &mut World) {
    if world.phase != GamePhase::CharacterDown {
        return;
    }
    let Some(at) = world.game_over_at else {
        return;
    };
    if world.time_ms >= at {
        let coins = world.character.coins;
        log::info!("Game over with {} coins", coins);
        world.phase = GamePhase::Lost;
        world.cue(AudioCue::Play(Sound::GameOver));
        world.emit(GameEvent::GameOver { coins });
    }
}

/// One combat pass. The steps run in a fixed order and each sees the
/// mutations of the steps before it.
pub fn resolve_interactions(world: &mut World, keyboard: &Keyboard) {
    update_boss_trigger(world);
    resolve_enemy_contacts(world, keyboard);
    collect_coins(world);
    collect_bottles(world);
    resolve_bubble_hits(world, keyboard);
    check_character_death(world);
    world.bubbles.retain(|b| b.active);
}

/// Engage the boss once the character enters the arena and keep it facing
/// the character afterwards
fn update_boss_trigger(world: &mut World) {
    let character_x = world.character.body.pos.x;
    let Some(boss) = world.level.boss.as_mut() else {
        return;
    };
    if boss.dying {
        return;
    }
    if character_x > BOSS_TRIGGER_X {
        boss.engage(&mut world.rng);
    }
    if boss.first_contact {
        boss.move_direction = if character_x < boss.body.pos.x {
            MoveDirection::Left
        } else {
            MoveDirection::Right
        };
    }
}

/// Start the death sequence of a foe whose health ran out
fn kill_check(foe: &mut dyn Hostile, events: &mut Vec<GameEvent>) {
    if foe.health() <= 0 && !foe.is_dying() {
        foe.start_dying();
        events.push(GameEvent::EnemyKilled(foe.foe()));
    }
}

fn resolve_enemy_contacts(world: &mut World, keyboard: &Keyboard) {
    let now = world.time_ms;
    let World {
        character,
        level,
        events,
        status_life,
        attack_damage,
        ..
    } = world;
    if character.is_dead() {
        return;
    }
    // Contact immunity lasts only while the slap stance is held
    if !character.slap_held(keyboard) {
        character.execute_attack = false;
    }

    let foes = level
        .enemies
        .iter_mut()
        .map(|e| e as &mut dyn Hostile)
        .chain(level.boss.iter_mut().map(|b| b as &mut dyn Hostile));
    for foe in foes {
        if character.is_dead() {
            break;
        }
        if foe.is_dying() || !character.body.is_colliding(foe.body()) {
            continue;
        }
        character.enemy_type = Some(foe.foe());

        if foe.foe() == Foe::PufferFish && character.slap_held(keyboard) {
            if character.attack(&mut *foe, *attack_damage, now, keyboard) {
                character.execute_attack = true;
                kill_check(foe, events);
            }
        } else if !character.execute_attack && character.hit(foe.collision_damage(), now) {
            events.push(GameEvent::Audio(AudioCue::Play(character.hurt_sound())));
            status_life.set_percentage(character.energy);
            log::debug!(
                "Character hit by {:?}, energy {}",
                foe.foe(),
                character.energy
            );
        }
    }
}

fn collect_coins(world: &mut World) {
    let World {
        character,
        level,
        events,
        status_coins,
        ..
    } = world;
    if character.is_dead() {
        return;
    }
    level.coins.retain(|coin| {
        if !character.body.is_colliding(&coin.body) {
            return true;
        }
        character.count_coins();
        status_coins.set_percentage(character.coin_percentage);
        events.push(GameEvent::Audio(AudioCue::Play(Sound::CollectCoins)));
        events.push(GameEvent::CoinCollected {
            total: character.coins,
        });
        false
    });
}

fn collect_bottles(world: &mut World) {
    let World {
        character,
        level,
        events,
        status_bottles,
        ..
    } = world;
    if character.is_dead() {
        return;
    }
    level.bottles.retain(|bottle| {
        if !character.body.is_colliding(&bottle.body) {
            return true;
        }
        character.count_bottles();
        status_bottles.set_percentage(character.bottles as i32);
        events.push(GameEvent::Audio(AudioCue::Play(Sound::CollectBottle)));
        events.push(GameEvent::BottleCollected {
            ammo: character.bottles,
        });
        false
    });
}

/// Each active bubble pops on the first living foe it touches
fn resolve_bubble_hits(world: &mut World, keyboard: &Keyboard) {
    let now = world.time_ms;
    let World {
        character,
        level,
        bubbles,
        events,
        attack_damage,
        ..
    } = world;

    for bubble in bubbles.iter_mut().filter(|b| b.active) {
        for enemy in level.enemies.iter_mut() {
            if enemy.is_dying() || !bubble.body.is_colliding(&enemy.body) {
                continue;
            }
            character.attack(&mut *enemy, *attack_damage, now, keyboard);
            kill_check(enemy, events);
            bubble.deactivate();
            events.push(GameEvent::Audio(AudioCue::Stop(Sound::BubbleAttack)));
            break;
        }
        if !bubble.active {
            continue;
        }
        if let Some(boss) = level.boss.as_mut() {
            if boss.is_dying() || !bubble.body.is_colliding(&boss.body) {
                continue;
            }
            if character.attack(&mut *boss, *attack_damage, now, keyboard) {
                boss.hurt();
            }
            kill_check(boss, events);
            bubble.deactivate();
            events.push(GameEvent::Audio(AudioCue::Stop(Sound::BubbleAttack)));
        }
    }
}

/// A dead character cannot move; the first pass after death schedules game over
fn check_character_death(world: &mut World) {
    if !world.character.is_dead() {
        return;
    }
    world.character.can_move = Permissions::NONE;
    if world.phase != GamePhase::Playing {
        return;
    }
    let killer = world.character.enemy_type;
    log::info!("Character died (killer: {:?})", killer);
    world.phase = GamePhase::CharacterDown;
    world.game_over_at = Some(world.time_ms + GAME_OVER_DELAY_MS);
    world.cue(AudioCue::StopMusic);
    world.emit(GameEvent::CharacterDied { killer });
}
