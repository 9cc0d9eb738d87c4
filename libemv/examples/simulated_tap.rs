// Simulated tap example: reads a scripted dual-application card.

// There is no radio here. `SimulatedCard` answers SELECT / GPO / READ RECORD
// the way a Visa card with a second Mastercard application would, so the
// whole read flow can be watched with `RUST_LOG=libemv=trace`.

use libemv::prelude::*;
use libemv::reader::read_in_background;
use libemv::test_support::{
    SimulatedCard, gpo_with_afl, gpo_with_track2, record_with_track2, track2,
};

const VISA: &[u8] = &[0xA0, 0x00, 0x00, 0x00, 0x03, 0x10, 0x10];
const MASTERCARD: &[u8] = &[0xA0, 0x00, 0x00, 0x00, 0x04, 0x10, 0x10];

struct Printer;

impl ReadCallback for Printer {
    fn on_card_ready(&mut self, card: CardRecord) {
        println!("Card ready");
        println!("  number  : {}", card.card_number());
        println!("  expiry  : {}/{}", card.expiry_month(), card.expiry_year());
        if let Some(name) = card.holder_name() {
            println!("  holder  : {}", name);
        }
        if let Some(scheme) = card.scheme() {
            println!("  scheme  : {}", scheme);
        }
        if let Some(sc) = card.service_code() {
            println!("  service : {}", sc);
            for line in [
                sc.interchange_and_technology(),
                sc.authorization_processing(),
                sc.allowed_services_and_pin(),
            ]
            .into_iter()
            .flatten()
            {
                println!("            {}", line);
            }
        }
        if let Some(second) = card.second_card_number() {
            println!(
                "  second  : {} ({}/{})",
                second,
                card.second_expiry_month(),
                card.second_expiry_year()
            );
        }
    }

    fn on_card_unreadable_transient(&mut self) {
        println!("Card moved too fast, tap again");
    }

    fn on_card_unreadable_permanent(&mut self) {
        println!("Card not supported");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let card = SimulatedCard::new()
        .with_ppse(&[VISA, MASTERCARD])
        .with_application(
            VISA,
            Some(&[0x9F, 0x66, 0x04, 0x9F, 0x02, 0x06]),
            gpo_with_afl(&[0x08, 0x01, 0x02, 0x00]),
        )
        .with_record(
            1,
            1,
            record_with_track2(&track2("4000000000000002D2512121000"), Some("DOE/JANE")),
        )
        .with_application(MASTERCARD, None, gpo_with_track2(&track2("5413330089010434D2701201")));

    println!("Tapping simulated card...");
    let outcome = read_in_background(card, ReaderConfig::default()).recv()?;
    outcome.dispatch(&mut Printer);
    Ok(())
}
