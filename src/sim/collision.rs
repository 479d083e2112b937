//! Collision detection and response for axis-aligned boxes
//!
//! Platform contacts are resolved after the actor has integrated its full
//! displacement for the tick. The current velocity is used as the crossing
//! window, so a fast actor that ends the tick inside a thin platform still
//! lands on it instead of tunnelling through.

use super::actor::Actor;
use super::entities::{Coin, Enemy, Platform};
use super::rect::Rect;
use crate::consts::CONTACT_EPSILON;

/// Which face of a platform the actor was resolved against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Landed on the platform's top surface
    Top,
    /// Hit the platform's underside while rising
    Bottom,
    /// Ran into the platform's left side
    Left,
    /// Ran into the platform's right side
    Right,
}

/// Strict AABB overlap; rectangles sharing an edge don't overlap
#[inline]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps_x(b) && a.overlaps_y(b)
}

/// Resolve the actor against one platform, snapping it flush on contact
///
/// Checks top landing, then head bump, then (only while moving
/// horizontally) the left and right sides. At most one contact is reported.
pub fn resolve_actor_platform(actor: &mut Actor, platform: &Platform) -> Option<Contact> {
    let a = actor.rect;
    let p = platform.rect;
    let vel = actor.vel;

    if vel.y > 0.0
        && a.bottom() <= p.top() + vel.y + CONTACT_EPSILON
        && a.bottom() >= p.top()
        && a.overlaps_x(&p)
    {
        actor.rect.pos.y = p.top() - a.height();
        actor.vel.y = 0.0;
        actor.jumping = false;
        return Some(Contact::Top);
    }

    if vel.y < 0.0
        && a.top() >= p.bottom() + vel.y - CONTACT_EPSILON
        && a.top() <= p.bottom()
        && a.overlaps_x(&p)
    {
        actor.rect.pos.y = p.bottom();
        actor.vel.y = 0.0;
        return Some(Contact::Bottom);
    }

    if vel.x > 0.0
        && a.right() <= p.left() + vel.x + CONTACT_EPSILON
        && a.right() >= p.left()
        && a.overlaps_y(&p)
    {
        actor.rect.pos.x = p.left() - a.width();
        return Some(Contact::Left);
    }

    if vel.x < 0.0
        && a.left() >= p.right() + vel.x - CONTACT_EPSILON
        && a.left() <= p.right()
        && a.overlaps_y(&p)
    {
        actor.rect.pos.x = p.right();
        return Some(Contact::Right);
    }

    None
}

/// Whether the actor is close enough to collect a coin
///
/// Treats the actor as a circle of its half-width around its center.
pub fn check_pickup(actor: &Actor, coin: &Coin) -> bool {
    let distance = actor.rect.center().distance(coin.rect().center());
    distance < actor.rect.width() / 2.0 + coin.size / 2.0
}

/// Whether an overlapping actor lands on top of the enemy this tick
///
/// Uses the actor's own per-tick fall as the window: the actor must be
/// moving down and its bottom edge must be no deeper than `vy` below the
/// enemy's top.
pub fn is_stomp(actor: &Actor, enemy: &Enemy) -> bool {
    actor.vel.y > 0.0 && actor.rect.bottom() <= enemy.rect.top() + actor.vel.y
}
