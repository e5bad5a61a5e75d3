use crate::tuid::{Tuid, Variant, CDT_WIDTH};
use torugo_cdt::{Cdt, Clock, SystemClock};

const CHARSET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ALPHA_COUNT: usize = 26;

/// Produces [`Tuid`]s from a clock and the thread-local RNG.
///
/// Generation never fails: the random source is bounded and the clock is
/// always readable. The clock is generic so tests can pin the time segment.
pub struct TuidGenerator<C: Clock = SystemClock> {
    clock: C,
}

impl TuidGenerator<SystemClock> {
    /// Creates a generator backed by the real system clock.
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for TuidGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TuidGenerator<C> {
    /// Creates a generator backed by the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Generates an identifier of the requested layout.
    pub fn generate(&self, variant: Variant) -> Tuid {
        match variant {
            Variant::Short => self.short(),
            Variant::Medium => self.medium(),
            Variant::Long => self.long(),
        }
    }

    /// Generates a 20-character identifier.
    pub fn short(&self) -> Tuid {
        let head = random_segment(7, true);
        Tuid::assemble(format!("{head}-TS{}", self.time_segment()))
    }

    /// Generates a 26-character identifier.
    pub fn medium(&self) -> Tuid {
        let a = random_segment(8, true);
        let b = random_segment(4, false);
        Tuid::assemble(format!("{a}-{b}-TM{}", self.time_segment()))
    }

    /// Generates a 36-character identifier.
    pub fn long(&self) -> Tuid {
        let a = random_segment(8, true);
        let b = random_segment(4, false);
        let c = random_segment(9, false);
        Tuid::assemble(format!("{a}-{b}-{c}-TL{}", self.time_segment()))
    }

    /// The current instant as a CDT, left-zero-padded to 10 characters.
    fn time_segment(&self) -> String {
        let cdt = Cdt::from_clock(&self.clock);
        format!("{:0>width$}", cdt.as_str(), width = CDT_WIDTH)
    }
}

/// Uniform draw over `[A-Z0-9]`; with `init_with_alpha`, the first character
/// draws over `[A-Z]` only so the identifier never starts with a digit.
fn random_segment(len: usize, init_with_alpha: bool) -> String {
    let mut out = String::with_capacity(len);
    for i in 0..len {
        let bound = if i == 0 && init_with_alpha {
            ALPHA_COUNT
        } else {
            CHARSET.len()
        };
        out.push(CHARSET[fastrand::usize(..bound)] as char);
    }
    out
}
