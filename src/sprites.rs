//! Sprite identifiers for every animation sequence in the game
//!
//! Identifiers are asset paths; the host's image loader resolves them. The
//! simulation only ever compares and forwards them.

/// A single sprite identifier
pub type SpriteId = &'static str;

/// An ordered animation sequence
pub type Sequence = &'static [SpriteId];

// --- Character ---

pub const CHARACTER_IDLE: Sequence = &[
    "graphics/1.Sharkie/1.IDLE/1.png",
    "graphics/1.Sharkie/1.IDLE/2.png",
    "graphics/1.Sharkie/1.IDLE/3.png",
    "graphics/1.Sharkie/1.IDLE/4.png",
    "graphics/1.Sharkie/1.IDLE/5.png",
    "graphics/1.Sharkie/1.IDLE/6.png",
    "graphics/1.Sharkie/1.IDLE/7.png",
    "graphics/1.Sharkie/1.IDLE/8.png",
    "graphics/1.Sharkie/1.IDLE/9.png",
    "graphics/1.Sharkie/1.IDLE/10.png",
    "graphics/1.Sharkie/1.IDLE/11.png",
    "graphics/1.Sharkie/1.IDLE/12.png",
    "graphics/1.Sharkie/1.IDLE/13.png",
    "graphics/1.Sharkie/1.IDLE/14.png",
    "graphics/1.Sharkie/1.IDLE/15.png",
    "graphics/1.Sharkie/1.IDLE/16.png",
    "graphics/1.Sharkie/1.IDLE/17.png",
    "graphics/1.Sharkie/1.IDLE/18.png",
];

pub const CHARACTER_FALL_ASLEEP: Sequence = &[
    "graphics/1.Sharkie/2.Long_IDLE/I1.png",
    "graphics/1.Sharkie/2.Long_IDLE/I2.png",
    "graphics/1.Sharkie/2.Long_IDLE/I3.png",
    "graphics/1.Sharkie/2.Long_IDLE/I4.png",
    "graphics/1.Sharkie/2.Long_IDLE/I5.png",
    "graphics/1.Sharkie/2.Long_IDLE/I6.png",
    "graphics/1.Sharkie/2.Long_IDLE/I7.png",
    "graphics/1.Sharkie/2.Long_IDLE/I8.png",
    "graphics/1.Sharkie/2.Long_IDLE/I9.png",
    "graphics/1.Sharkie/2.Long_IDLE/I10.png",
];

/// Looping "asleep" frames, reached after the fall-asleep sequence
pub const CHARACTER_SLEEP: Sequence = &[
    "graphics/1.Sharkie/2.Long_IDLE/I11.png",
    "graphics/1.Sharkie/2.Long_IDLE/I11.png",
    "graphics/1.Sharkie/2.Long_IDLE/I12.png",
    "graphics/1.Sharkie/2.Long_IDLE/I12.png",
    "graphics/1.Sharkie/2.Long_IDLE/I13.png",
    "graphics/1.Sharkie/2.Long_IDLE/I13.png",
    "graphics/1.Sharkie/2.Long_IDLE/I14.png",
    "graphics/1.Sharkie/2.Long_IDLE/I14.png",
];

pub const CHARACTER_SWIM: Sequence = &[
    "graphics/1.Sharkie/3.Swim/1.png",
    "graphics/1.Sharkie/3.Swim/2.png",
    "graphics/1.Sharkie/3.Swim/3.png",
    "graphics/1.Sharkie/3.Swim/4.png",
    "graphics/1.Sharkie/3.Swim/5.png",
    "graphics/1.Sharkie/3.Swim/6.png",
];

pub const CHARACTER_HURT_POISONED: Sequence = &[
    "graphics/1.Sharkie/5.Hurt/1.Poisoned/1.png",
    "graphics/1.Sharkie/5.Hurt/1.Poisoned/2.png",
    "graphics/1.Sharkie/5.Hurt/1.Poisoned/3.png",
    "graphics/1.Sharkie/5.Hurt/1.Poisoned/4.png",
];

pub const CHARACTER_HURT_SHOCKED: Sequence = &[
    "graphics/1.Sharkie/5.Hurt/2.Electric shock/o1.png",
    "graphics/1.Sharkie/5.Hurt/2.Electric shock/o2.png",
];

pub const CHARACTER_DEAD_POISONED: Sequence = &[
    "graphics/1.Sharkie/6.dead/1.Poisoned/1.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/2.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/3.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/4.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/5.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/6.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/7.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/8.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/8.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/10.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/11.png",
    "graphics/1.Sharkie/6.dead/1.Poisoned/12.png",
];

pub const CHARACTER_DEAD_SHOCKED: Sequence = &[
    "graphics/1.Sharkie/6.dead/2.Electro_shock/1.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/2.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/3.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/4.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/5.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/6.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/7.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/8.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/9.png",
    "graphics/1.Sharkie/6.dead/2.Electro_shock/10.png",
];

pub const CHARACTER_ATTACK_BUBBLE: Sequence = &[
    "graphics/1.Sharkie/4.Attack/Bubble trap/op1 (with bubble formation)/1.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/op1 (with bubble formation)/2.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/op1 (with bubble formation)/3.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/op1 (with bubble formation)/4.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/op1 (with bubble formation)/5.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/op1 (with bubble formation)/6.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/op1 (with bubble formation)/7.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/op1 (with bubble formation)/8.png",
];

pub const CHARACTER_ATTACK_POISONED_BUBBLE: Sequence = &[
    "graphics/1.Sharkie/4.Attack/Bubble trap/For Whale/1.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/For Whale/2.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/For Whale/3.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/For Whale/4.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/For Whale/5.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/For Whale/6.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/For Whale/7.png",
    "graphics/1.Sharkie/4.Attack/Bubble trap/For Whale/8.png",
];

pub const CHARACTER_ATTACK_FIN_SLAP: Sequence = &[
    "graphics/1.Sharkie/4.Attack/Fin slap/1.png",
    "graphics/1.Sharkie/4.Attack/Fin slap/2.png",
    "graphics/1.Sharkie/4.Attack/Fin slap/3.png",
    "graphics/1.Sharkie/4.Attack/Fin slap/4.png",
    "graphics/1.Sharkie/4.Attack/Fin slap/5.png",
    "graphics/1.Sharkie/4.Attack/Fin slap/6.png",
    "graphics/1.Sharkie/4.Attack/Fin slap/7.png",
    "graphics/1.Sharkie/4.Attack/Fin slap/8.png",
];

// --- Enemies ---

pub const JELLY_FISH_GREEN: Sequence = &[
    "graphics/2.Enemy/2 Jelly fish/Súper dangerous/Green 1.png",
    "graphics/2.Enemy/2 Jelly fish/Súper dangerous/Green 2.png",
    "graphics/2.Enemy/2 Jelly fish/Súper dangerous/Green 3.png",
    "graphics/2.Enemy/2 Jelly fish/Súper dangerous/Green 4.png",
];

pub const JELLY_FISH_GREEN_DYING: Sequence = &[
    "graphics/2.Enemy/2 Jelly fish/Dead/green/g1.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/green/g2.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/green/g3.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/green/g4.png",
];

pub const JELLY_FISH_LILA: Sequence = &[
    "graphics/2.Enemy/2 Jelly fish/Regular damage/Lila 1.png",
    "graphics/2.Enemy/2 Jelly fish/Regular damage/Lila 2.png",
    "graphics/2.Enemy/2 Jelly fish/Regular damage/Lila 3.png",
    "graphics/2.Enemy/2 Jelly fish/Regular damage/Lila 4.png",
];

pub const JELLY_FISH_LILA_DYING: Sequence = &[
    "graphics/2.Enemy/2 Jelly fish/Dead/Lila/L1.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Lila/L2.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Lila/L3.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Lila/L4.png",
];

pub const JELLY_FISH_PINK: Sequence = &[
    "graphics/2.Enemy/2 Jelly fish/Súper dangerous/Pink 1.png",
    "graphics/2.Enemy/2 Jelly fish/Súper dangerous/Pink 2.png",
    "graphics/2.Enemy/2 Jelly fish/Súper dangerous/Pink 3.png",
    "graphics/2.Enemy/2 Jelly fish/Súper dangerous/Pink 4.png",
];

pub const JELLY_FISH_PINK_DYING: Sequence = &[
    "graphics/2.Enemy/2 Jelly fish/Dead/Pink/P1.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Pink/P2.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Pink/P3.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Pink/P4.png",
];

pub const JELLY_FISH_YELLOW: Sequence = &[
    "graphics/2.Enemy/2 Jelly fish/Regular damage/Yellow 1.png",
    "graphics/2.Enemy/2 Jelly fish/Regular damage/Yellow 2.png",
    "graphics/2.Enemy/2 Jelly fish/Regular damage/Yellow 3.png",
    "graphics/2.Enemy/2 Jelly fish/Regular damage/Yellow 4.png",
];

pub const JELLY_FISH_YELLOW_DYING: Sequence = &[
    "graphics/2.Enemy/2 Jelly fish/Dead/Yellow/y1.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Yellow/y2.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Yellow/y3.png",
    "graphics/2.Enemy/2 Jelly fish/Dead/Yellow/y4.png",
];

pub const PUFFER_FISH_ORANGE: Sequence = &[
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/2.swim1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/2.swim2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/2.swim3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/2.swim4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/2.swim5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/2.bubbleswim1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/2.bubbleswim2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/2.bubbleswim3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/2.bubbleswim4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/2.bubbleswim5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/2.transition1.png",
];

pub const PUFFER_FISH_ORANGE_DYING: Sequence = &[
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/2.Dead 1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/2.Dead 2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/2.Dead 3.png",
];

pub const PUFFER_FISH_PINK: Sequence = &[
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/3.swim1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/3.swim2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/3.swim3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/3.swim4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/3.swim5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/3.bubbleswim1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/3.bubbleswim2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/3.bubbleswim3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/3.bubbleswim4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/3.bubbleswim5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/3.transition1.png",
];

pub const PUFFER_FISH_PINK_DYING: Sequence = &[
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/3.Dead 1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/3.Dead 2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/3.Dead 3.png",
];

pub const PUFFER_FISH_GREEN: Sequence = &[
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/1.swim1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/1.swim2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/1.swim3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/1.swim4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/1.Swim/1.swim5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/1.bubbleswim1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/1.bubbleswim2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/1.bubbleswim3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/1.bubbleswim4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/3.Bubbleeswim/1.bubbleswim5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition5.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition4.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition3.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/2.transition/1.transition1.png",
];

pub const PUFFER_FISH_GREEN_DYING: Sequence = &[
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/1.Dead 1.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/1.Dead 2.png",
    "graphics/2.Enemy/1.Puffer fish (3 color options)/4.DIE/1.Dead 3.png",
];

// --- Endboss ---

pub const ENDBOSS_INTRODUCE: Sequence = &[
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/1.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/2.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/3.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/4.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/5.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/6.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/7.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/8.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/9.png",
    "graphics/2.Enemy/3 Final Enemy/1.Introduce/10.png",
];

pub const ENDBOSS_FLOATING: Sequence = &[
    "graphics/2.Enemy/3 Final Enemy/2.floating/1.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/2.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/3.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/4.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/5.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/6.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/7.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/8.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/9.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/10.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/11.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/12.png",
    "graphics/2.Enemy/3 Final Enemy/2.floating/13.png",
];

pub const ENDBOSS_ATTACK: Sequence = &[
    "graphics/2.Enemy/3 Final Enemy/Attack/1.png",
    "graphics/2.Enemy/3 Final Enemy/Attack/2.png",
    "graphics/2.Enemy/3 Final Enemy/Attack/3.png",
    "graphics/2.Enemy/3 Final Enemy/Attack/4.png",
    "graphics/2.Enemy/3 Final Enemy/Attack/5.png",
    "graphics/2.Enemy/3 Final Enemy/Attack/6.png",
];

pub const ENDBOSS_HURT: Sequence = &[
    "graphics/2.Enemy/3 Final Enemy/Hurt/1.png",
    "graphics/2.Enemy/3 Final Enemy/Hurt/2.png",
    "graphics/2.Enemy/3 Final Enemy/Hurt/3.png",
    "graphics/2.Enemy/3 Final Enemy/Hurt/4.png",
];

pub const ENDBOSS_DEAD: Sequence = &[
    "graphics/2.Enemy/3 Final Enemy/Dead/0.png",
    "graphics/2.Enemy/3 Final Enemy/Dead/1.png",
    "graphics/2.Enemy/3 Final Enemy/Dead/2.png",
    "graphics/2.Enemy/3 Final Enemy/Dead/3.png",
    "graphics/2.Enemy/3 Final Enemy/Dead/4.png",
    "graphics/2.Enemy/3 Final Enemy/Dead/5.png",
];

// --- Collectibles and projectiles ---

pub const COIN: Sequence = &[
    "graphics/4. Marcadores/1. Coins/1.png",
    "graphics/4. Marcadores/1. Coins/2.png",
    "graphics/4. Marcadores/1. Coins/3.png",
    "graphics/4. Marcadores/1. Coins/4.png",
];

pub const BOTTLE: Sequence = &[
    "graphics/4. Marcadores/Posión/Animada/1.png",
    "graphics/4. Marcadores/Posión/Animada/2.png",
    "graphics/4. Marcadores/Posión/Animada/3.png",
    "graphics/4. Marcadores/Posión/Animada/4.png",
    "graphics/4. Marcadores/Posión/Animada/5.png",
    "graphics/4. Marcadores/Posión/Animada/6.png",
    "graphics/4. Marcadores/Posión/Animada/7.png",
    "graphics/4. Marcadores/Posión/Animada/8.png",
];

pub const BUBBLE_NORMAL: SpriteId = "graphics/1.Sharkie/4.Attack/Bubble trap/Bubble.png";
pub const BUBBLE_POISONED: SpriteId =
    "graphics/1.Sharkie/4.Attack/Bubble trap/Poisoned Bubble (for whale).png";

// --- Status bars (0, 20, 40, 60, 80, 100 percent) ---

pub const STATUS_LIFE: Sequence = &[
    "graphics/4. Marcadores/green/Life/0_  copia 3.png",
    "graphics/4. Marcadores/green/Life/20_ copia 4.png",
    "graphics/4. Marcadores/green/Life/40_  copia 3.png",
    "graphics/4. Marcadores/green/Life/60_  copia 3.png",
    "graphics/4. Marcadores/green/Life/80_  copia 3.png",
    "graphics/4. Marcadores/green/Life/100_  copia 2.png",
];

pub const STATUS_BOTTLES: Sequence = &[
    "graphics/4. Marcadores/green/poisoned bubbles/0_ copia 2.png",
    "graphics/4. Marcadores/green/poisoned bubbles/20_ copia 3.png",
    "graphics/4. Marcadores/green/poisoned bubbles/40_ copia 2.png",
    "graphics/4. Marcadores/green/poisoned bubbles/60_ copia 2.png",
    "graphics/4. Marcadores/green/poisoned bubbles/80_ copia 2.png",
    "graphics/4. Marcadores/green/poisoned bubbles/100_ copia 3.png",
];

pub const STATUS_COINS: Sequence = &[
    "graphics/4. Marcadores/green/Coin/0_  copia 4.png",
    "graphics/4. Marcadores/green/Coin/20_  copia 2.png",
    "graphics/4. Marcadores/green/Coin/40_  copia 4.png",
    "graphics/4. Marcadores/green/Coin/60_  copia 4.png",
    "graphics/4. Marcadores/green/Coin/80_  copia 4.png",
    "graphics/4. Marcadores/green/Coin/100_ copia 4.png",
];

// --- Scenery ---

pub const BARRIER_TALL: SpriteId = "graphics/3. Background/Barrier/1.png";
pub const BARRIER_WIDE: SpriteId = "graphics/3. Background/Barrier/2.png";
pub const BARRIER_PILLAR: SpriteId = "graphics/3. Background/Barrier/3.png";

pub const LIGHT_1: SpriteId = "graphics/3. Background/Layers/1. Light/1.png";
pub const LIGHT_2: SpriteId = "graphics/3. Background/Layers/1. Light/2.png";

/// Parallax layers as (first tile, second tile, scroll factor), back to front
pub const BACKGROUND_LAYERS: [(SpriteId, SpriteId, f32); 4] = [
    (
        "graphics/3. Background/Layers/5. Water/D1.png",
        "graphics/3. Background/Layers/5. Water/D2.png",
        0.2,
    ),
    (
        "graphics/3. Background/Layers/4.Fondo 2/D1.png",
        "graphics/3. Background/Layers/4.Fondo 2/D2.png",
        0.4,
    ),
    (
        "graphics/3. Background/Layers/3.Fondo 1/D1.png",
        "graphics/3. Background/Layers/3.Fondo 1/D2.png",
        0.6,
    ),
    (
        "graphics/3. Background/Layers/2. Floor/D1.png",
        "graphics/3. Background/Layers/2. Floor/D2.png",
        1.0,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_lengths() {
        assert_eq!(CHARACTER_IDLE.len(), 18);
        assert_eq!(CHARACTER_ATTACK_FIN_SLAP.len(), 8);
        assert_eq!(PUFFER_FISH_GREEN_DYING.len(), 3);
        assert_eq!(JELLY_FISH_PINK_DYING.len(), 4);
        assert_eq!(ENDBOSS_INTRODUCE.len(), 10);
        assert_eq!(ENDBOSS_ATTACK.len(), 6);
        assert_eq!(ENDBOSS_HURT.len(), 4);
        assert_eq!(STATUS_LIFE.len(), 6);
    }
}
