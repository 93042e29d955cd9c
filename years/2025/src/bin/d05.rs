use lib::prelude::*;
use y2025::d05;

fn main() -> Result<()> {
    lib::cli::run(|input, s| {
        let db = d05::parse(input)?;
        s.part(Part::One, || Ok(d05::check_ids(&db)))?;
        s.part(Part::Two, || Ok(d05::coverage(&db)))?;
        Ok(())
    })
}
