use lib::prelude::*;
use y2025::d07;

fn main() -> Result<()> {
    lib::cli::run(|input, s| {
        let manifold = d07::parse(input)?;
        s.part(Part::One, || Ok(d07::splits(&manifold)))?;
        s.part(Part::Two, || Ok(d07::timelines(&manifold)?))?;
        Ok(())
    })
}
