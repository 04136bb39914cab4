use chancer::chance::{fast_chance, secure_chance};
use chancer::error::EntropyError;
use comfy_table::Table;

const TRIALS: u32 = 100_000;

fn main() -> Result<(), EntropyError> {
    let mut table = Table::new();
    table.set_header(vec![
        "chance %",
        "fast wins",
        "fast rate",
        "secure wins",
        "secure rate",
    ]);

    for chance in [0.0, 0.01, 12.5, 50.0, 99.99, 100.0] {
        let mut fast_wins: u32 = 0;
        let mut secure_wins: u32 = 0;

        for _ in 0..TRIALS {
            if fast_chance(chance) {
                fast_wins += 1;
            }
            if secure_chance(chance)? {
                secure_wins += 1;
            }
        }

        table.add_row(vec![
            format!("{chance}"),
            format!("{fast_wins}"),
            format!("{:.5}", f64::from(fast_wins) / f64::from(TRIALS)),
            format!("{secure_wins}"),
            format!("{:.5}", f64::from(secure_wins) / f64::from(TRIALS)),
        ]);
    }

    println!("{table}");

    Ok(())
}
