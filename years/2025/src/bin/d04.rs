use lib::prelude::*;
use y2025::d04;

fn main() -> Result<()> {
    lib::cli::run(|input, s| {
        let grid = d04::parse(input)?;
        s.part(Part::One, || Ok(d04::count_accessible(&grid)))?;
        s.part(Part::Two, move || Ok(d04::remove_accessible(grid)))?;
        Ok(())
    })
}
