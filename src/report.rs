use std::io::{self, Write};
use std::time::Duration;

use crate::handles;

/// The names a wrapper family reports under.
///
/// Most families use one name throughout; the exclusive-ownership family
/// fills owned handles but copies (and totals) under the name of the aliases
/// it produces instead.
#[derive(Clone, Copy, Debug)]
pub struct FamilyLabels {
    /// Name printed on the assignment-loop line.
    pub fill: &'static str,
    /// Name printed on the copy-loop line.
    pub copy: &'static str,
    /// Name printed on the total line.
    pub total: &'static str,
}

impl FamilyLabels {
    /// Shared-ownership family.
    pub const RC: Self = Self {
        fill: "Rc",
        copy: "Rc",
        total: "Rc",
    };

    /// Plain alias family.
    pub const REF: Self = Self {
        fill: "ref",
        copy: "ref",
        total: "ref",
    };

    /// Optional alias family.
    pub const OPTIONAL_REF: Self = Self {
        fill: "optional ref",
        copy: "optional ref",
        total: "optional ref",
    };

    /// Exclusive-ownership family: owned handles in, slot aliases out.
    pub const BOXED: Self = Self {
        fill: "Box",
        copy: "ref to Box",
        total: "ref to Box",
    };
}

/// Measured durations for one family's two phases.
#[derive(Clone, Copy, Debug)]
pub struct FamilyTiming {
    labels: FamilyLabels,
    fill: Duration,
    copy: Duration,
}

impl FamilyTiming {
    /// Pairs a family's labels with its measured phase durations.
    pub fn new(labels: FamilyLabels, fill: Duration, copy: Duration) -> Self {
        Self { labels, fill, copy }
    }

    /// The names this family reports under.
    pub fn labels(&self) -> FamilyLabels {
        self.labels
    }

    /// Measured duration of the fill phase.
    pub fn fill(&self) -> Duration {
        self.fill
    }

    /// Measured duration of the copy phase.
    pub fn copy(&self) -> Duration {
        self.copy
    }

    /// The family's total: fill plus copy.
    pub fn total(&self) -> Duration {
        self.fill + self.copy
    }

    /// Writes the family's report block: one line per phase, the total, and
    /// a trailing blank line.
    ///
    /// Durations are printed as a plain decimal count of seconds (`f64`
    /// `Display` never switches to scientific notation, however small the
    /// value).
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "Time for {} assignment loop: {} seconds",
            self.labels.fill,
            self.fill.as_secs_f64()
        )?;
        writeln!(
            out,
            "Time for {} copy loop: {} seconds",
            self.labels.copy,
            self.copy.as_secs_f64()
        )?;
        writeln!(
            out,
            "Total time for {}: {} seconds",
            self.labels.total,
            self.total().as_secs_f64()
        )?;
        writeln!(out)
    }
}

/// Writes the five probe footprint lines and a trailing blank line.
pub fn write_footprints<W: Write>(out: &mut W) -> io::Result<()> {
    for probe in handles::footprints().iter() {
        writeln!(out, "{}_size: {}", probe.label, probe.bytes)?;
    }
    writeln!(out)
}
