//! The demo world used by the CLI and integration tests.

use delve_core::Name;

use crate::creature::{Creature, Location};
use crate::error::GameResult;
use crate::item::Item;
use crate::session::GameState;
use crate::skill::Skill;
use crate::wiki::Wiki;

/// Build the demo state: a forest clearing stocked with creatures,
/// items, and skills, plus the built-in wiki.
pub fn demo_state() -> GameResult<GameState> {
    let clearing = Location::new(
        Name::new("Forest Clearing"),
        "Tall grass sways between mossy stones. The forest presses in on every side.",
    )
    .with_creature(Creature::new(
        Name::new("Big White Tiger"),
        "A pale giant with unhurried eyes.",
        30,
    ))
    .with_creature(Creature::new(
        Name::new("Small Black Tiger"),
        "Quick, quiet, and hungry.",
        15,
    ))
    .with_creature(Creature::new(
        Name::new("Brown Bear"),
        "It has not noticed you. Yet.",
        45,
    ))
    .with_item(Item::new(
        Name::new("Rusty Sword").with_alias("sword"),
        "Seen better days, but it still holds an edge.",
    ))
    .with_item(Item::new(
        Name::new("Apple").with_plural("Apples"),
        "Crisp and red.",
    ))
    .with_item(Item::new(
        Name::new("Apple").with_plural("Apples"),
        "Crisp and red.",
    ));

    let mut state = GameState::new(clearing, Wiki::builtin()?);
    state
        .skills
        .learn(Skill::new(Name::new("Fireball"), "A burst of flame."));
    state.skills.learn(Skill::new(
        Name::new("Healing Word").with_alias("heal"),
        "Mends small wounds.",
    ));
    Ok(state)
}
