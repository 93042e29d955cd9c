use lib::prelude::*;
use y2025::d02::{self, Repeat};

fn main() -> Result<()> {
    lib::cli::run(|input, s| {
        let ranges = d02::parse(input)?;
        s.part(Part::One, || Ok(d02::find_invalid(&ranges, Repeat::Twice)))?;
        s.part(Part::Two, || Ok(d02::find_invalid(&ranges, Repeat::AtLeastTwice)))?;
        Ok(())
    })
}
