use rapier2d::prelude::*;
use std::collections::HashSet;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Default group - interacts with everything
    Default = 0b0000_0001,

    /// Player and enemy characters
    Character = 0b0000_0010,

    /// Static platforms and walls
    Platform = 0b0000_0100,

    /// Attack hitboxes (sensors only)
    Hitbox = 0b0000_1000,
}

impl CollisionGroups {
    /// Convert to rapier2d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Characters stand on platforms and get hit by hitboxes, but pass
            // through each other so the enemy can jump over the player
            CollisionGroups::Character => Group::from_bits_truncate(
                CollisionGroups::Platform as u32 | CollisionGroups::Hitbox as u32,
            ),

            CollisionGroups::Platform => Group::from_bits_truncate(
                CollisionGroups::Character as u32 | CollisionGroups::Default as u32,
            ),

            // Hitboxes only care about characters
            CollisionGroups::Hitbox => Group::from_bits_truncate(CollisionGroups::Character as u32),

            CollisionGroups::Default => Group::ALL,
        };

        InteractionGroups::new(memberships, filter)
    }
}

/// One touching collider and the contact normal as seen by the queried collider
///
/// The normal points away from the other surface, toward the queried
/// collider: standing on flat ground gives `normal.y == 1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceContact {
    pub other: ColliderHandle,
    pub normal: Vector<Real>,
}

/// Per-step contact notification for one collider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContactEvent {
    /// Still (or newly) touching `other` this step
    Stay { other: ColliderHandle, normal_y: Real },
    /// Stopped touching `other` since the previous step
    Exit { other: ColliderHandle },
}

/// Turns per-step contact snapshots into stay/exit notifications
#[derive(Debug, Default)]
pub struct ContactTracker {
    touching: HashSet<ColliderHandle>,
}

impl ContactTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diff this step's contacts against the previous step's
    pub fn update(&mut self, contacts: &[SurfaceContact]) -> Vec<ContactEvent> {
        let current: HashSet<ColliderHandle> = contacts.iter().map(|c| c.other).collect();

        // Exits come last: losing any contact leaves the step ungrounded even
        // when another surface is still underfoot
        let mut events: Vec<ContactEvent> = contacts
            .iter()
            .map(|contact| ContactEvent::Stay {
                other: contact.other,
                normal_y: contact.normal.y,
            })
            .collect();

        events.extend(
            self.touching
                .difference(&current)
                .map(|other| ContactEvent::Exit { other: *other }),
        );

        self.touching = current;
        events
    }

    /// Number of colliders touched in the last update
    pub fn touching_count(&self) -> usize {
        self.touching.len()
    }
}
