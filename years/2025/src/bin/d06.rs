use lib::prelude::*;
use y2025::d06::{self, Reading};

fn main() -> Result<()> {
    lib::cli::run(|input, s| {
        let sheet = d06::parse(input)?;
        s.part(Part::One, || Ok(d06::solve(&sheet, Reading::Rows)?))?;
        s.part(Part::Two, || Ok(d06::solve(&sheet, Reading::Columns)?))?;
        Ok(())
    })
}
