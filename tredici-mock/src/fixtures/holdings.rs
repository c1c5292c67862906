use tredici_core::types::RawHolding;

pub fn by_symbol(s: &str) -> Option<Vec<RawHolding>> {
    match s {
        "RXRX" => Some(vec![
            row(
                "BlackRock Inc.",
                "2023-05-10",
                Some("13G/F"),
                Some("1,200,000"),
                None,
                None,
            ),
            row(
                "Vanguard Group Inc",
                "2023-05-12",
                Some("13G/F"),
                Some("950,500"),
                Some("4.1%"),
                Some("+12,000"),
            ),
            // Saturday reported date; resolves to the prior trading close.
            row(
                "ARK Investment Management LLC",
                "2023-05-13",
                None,
                Some("310,250"),
                None,
                None,
            ),
            // Duplicate of the BlackRock filing as a second source lists it.
            row(
                "BLACKROCK INC.",
                "2023-05-10",
                Some("13G/F"),
                Some("1,200,000"),
                None,
                None,
            ),
            // Not on the default watchlist; filtered out downstream.
            row(
                "State Street Corp",
                "2023-05-10",
                Some("13F"),
                Some("2,000,000"),
                None,
                None,
            ),
        ]),
        "PLTR" => Some(vec![row(
            "Vanguard Group Inc",
            "2023-02-14",
            Some("13G/F"),
            Some("4,400,000"),
            Some("2.9%"),
            None,
        )]),
        // Listed with price history but only non-watchlist holders.
        "QUIET" => Some(vec![row(
            "Geode Capital Management",
            "2023-01-03",
            Some("13F"),
            Some("55,000"),
            None,
            None,
        )]),
        _ => None,
    }
}

fn row(
    institution: &str,
    reported: &str,
    filing_type: Option<&str>,
    shares: Option<&str>,
    percent: Option<&str>,
    change: Option<&str>,
) -> RawHolding {
    RawHolding {
        institution: institution.to_string(),
        reported: Some(reported.to_string()),
        transaction: None,
        filing_type: filing_type.map(str::to_string),
        shares: shares.map(str::to_string),
        percent: percent.map(str::to_string),
        change: change.map(str::to_string),
    }
}
