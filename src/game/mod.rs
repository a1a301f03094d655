// Game layer: character controllers, their physics rig and the arena

pub mod arena;
pub mod characters;
pub mod rig;
