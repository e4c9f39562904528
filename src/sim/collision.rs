//! Player-vs-traffic collision detection

use super::car::Car;

/// Find the first traffic car touching the player.
///
/// Stops at the first hit; any hit ends the run, so order among simultaneous
/// hits does not matter.
pub fn check_all<'a>(player: &Car, traffic: &'a [Car]) -> Option<&'a Car> {
    traffic.iter().find(|car| player.overlaps(car))
}
