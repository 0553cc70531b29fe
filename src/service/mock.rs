use std::fs::File;

use rand::Rng;

use crate::service::{DEMO_ACCOUNTS, demo_card};

/// Generate a mock CSV file with random withdrawal requests. This is used to
/// exercise the machine end to end: most rows are clean multiples of the
/// smallest note, a few carry a wrong pin, a sub-denomination amount, or an
/// amount above the demo account balance.
pub fn generator(output: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["card", "pin", "amount", "currency"])?;

    let mut rng = rand::rng();

    for _ in 0..count {
        let account = rng.random_range(1..=DEMO_ACCOUNTS);
        let card = demo_card(account);

        let pin = if rng.random_range(0..10) == 0 {
            "9999"
        } else {
            "1234"
        };

        let amount = match rng.random_range(0..20) {
            0 => 3.1234,
            1 => 25_000.0,
            _ => (rng.random_range(1..=50) * 10) as f64,
        };

        let amount_str = format!("{:.4}", amount);
        wtr.write_record([card.number(), pin, amount_str.as_str(), "PLN"])?;
    }

    wtr.flush()?;
    println!("✓ Generated {} withdrawal requests to {}", count, output);
    Ok(())
}
