use chrono::NaiveDate;
use rust_decimal::Decimal;
use tredici_core::PriceSeries;
use tredici_core::types::Ticker;

pub fn by_symbol(s: &str) -> Option<PriceSeries> {
    match s {
        "RXRX" => Some(build(
            s,
            vec![
                ("2023-05-08", "5.12"),
                ("2023-05-09", "5.27"),
                ("2023-05-10", "5.43"),
                ("2023-05-12", "5.60"),
                ("2023-05-15", "5.51"),
            ],
        )),
        "PLTR" => Some(build(
            s,
            vec![
                ("2023-02-13", "8.00"),
                ("2023-02-14", "8.12"),
                ("2023-02-15", "7.95"),
            ],
        )),
        // Listed, but no disclosure rows anywhere.
        "QUIET" => Some(build(s, vec![("2023-01-03", "12.00")])),
        _ => None,
    }
}

fn build(symbol: &str, rows: Vec<(&str, &str)>) -> PriceSeries {
    let closes = rows.into_iter().map(|(date, close)| {
        (
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            close.parse::<Decimal>().unwrap(),
        )
    });
    PriceSeries::new(Ticker::new(symbol).unwrap(), closes)
}
