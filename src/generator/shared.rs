//! Process-wide default generator.

use super::Generator;
use std::sync::{Mutex, OnceLock};

static SHARED: OnceLock<Mutex<Generator>> = OnceLock::new();

/// Returns the process-wide generator built from the default policy.
///
/// It is created on first use. The mutex serialises the length-mutating
/// helpers against every other call; callers that do not need a shared
/// instance should build their own with [`Generator::new`].
pub fn shared() -> &'static Mutex<Generator> {
    SHARED.get_or_init(|| Mutex::new(Generator::new()))
}
