use crate::enums::Region;

/// A fund the dashboard offers for selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FundEntry {
    pub name: &'static str,
    pub region: Region,
}

const fn fund(name: &'static str, region: Region) -> FundEntry {
    FundEntry { name, region }
}

/// The popular funds offered in the selector, grouped by region.
pub const FUND_CATALOG: &[FundEntry] = &[
    // India
    fund("HDFC Top 100 Fund", Region::India),
    fund("SBI Bluechip Fund", Region::India),
    fund("Nippon India Growth Fund", Region::India),
    fund("ICICI Prudential Bluechip Fund", Region::India),
    fund("Axis Midcap Fund", Region::India),
    fund("UTI Nifty Index Fund", Region::India),
    fund("Kotak Flexicap Fund", Region::India),
    fund("Aditya Birla Sun Life Tax Relief 96", Region::India),
    fund("Mirae Asset Large Cap Fund", Region::India),
    fund("Parag Parikh Flexi Cap Fund", Region::India),
    fund("Tata Digital India Fund", Region::India),
    fund("Motilal Oswal Nasdaq 100 ETF", Region::India),
    fund("Quant Small Cap Fund", Region::India),
    fund("Canara Robeco Bluechip Equity Fund", Region::India),
    fund("Franklin India Prima Fund", Region::India),
    fund("Edelweiss Mid Cap Fund", Region::India),
    fund("Invesco India Contra Fund", Region::India),
    fund("Baroda BNP Paribas Large Cap Fund", Region::India),
    fund("DSP Tax Saver Fund", Region::India),
    fund("Sundaram Large and Midcap Fund", Region::India),
    // Europe
    fund("BlackRock Global Funds - European Equity Income Fund", Region::Europe),
    fund("HSBC GIF Europe Equity Smaller Companies", Region::Europe),
    fund("Fidelity European Growth Fund", Region::Europe),
    fund("JPMorgan Europe Dynamic Fund", Region::Europe),
    fund("Amundi Funds - Euroland Equity", Region::Europe),
    fund("Schroder ISF European Large Cap", Region::Europe),
    fund("DWS Invest European Equities", Region::Europe),
    fund("Nordea European Equity Fund", Region::Europe),
    fund("BNP Paribas Funds Europe Growth", Region::Europe),
    fund("AXA WF Framlington Europe Opportunities", Region::Europe),
    fund("Robeco European Stars Equities Fund", Region::Europe),
    fund("Invesco Pan European Structured Equity Fund", Region::Europe),
    fund("UBS European Opportunity Fund", Region::Europe),
    fund("Allianz Europe Equity Growth Fund", Region::Europe),
    fund("M&G European Strategic Value Fund", Region::Europe),
    fund("KBC Equity Fund Europe", Region::Europe),
    fund("Franklin Mutual European Fund", Region::Europe),
    fund("Pictet European Sustainable Equities", Region::Europe),
    fund("Candriam Equities L Europe Innovation", Region::Europe),
    fund("Threadneedle European Select Fund", Region::Europe),
    // US
    fund("Vanguard 500 Index Fund", Region::Us),
    fund("Fidelity Contrafund", Region::Us),
    fund("T. Rowe Price Blue Chip Growth Fund", Region::Us),
    fund("American Funds Growth Fund of America", Region::Us),
    fund("Schwab S&P 500 Index Fund", Region::Us),
    fund("BlackRock Equity Dividend Fund", Region::Us),
    fund("JPMorgan Large Cap Growth Fund", Region::Us),
    fund("Franklin Growth Fund", Region::Us),
    fund("Dodge & Cox Stock Fund", Region::Us),
    fund("Columbia Dividend Income Fund", Region::Us),
    fund("MFS Growth Fund", Region::Us),
    fund("Invesco QQQ Trust", Region::Us),
    fund("iShares Russell 1000 Growth ETF", Region::Us),
    fund("SPDR S&P 500 ETF Trust", Region::Us),
    fund("T. Rowe Price Dividend Growth Fund", Region::Us),
    fund("Vanguard Total Stock Market Index Fund", Region::Us),
    fund("Fidelity ZERO Large Cap Index Fund", Region::Us),
    fund("Principal Blue Chip Fund", Region::Us),
    fund("Janus Henderson Enterprise Fund", Region::Us),
    fund("Lord Abbett Growth Leaders Fund", Region::Us),
];

/// Case-insensitive exact lookup by fund name.
pub fn find_fund(name: &str) -> Option<&'static FundEntry> {
    let needle = name.trim();
    FUND_CATALOG
        .iter()
        .find(|f| f.name.eq_ignore_ascii_case(needle))
}

pub fn funds_in(region: Region) -> impl Iterator<Item = &'static FundEntry> {
    FUND_CATALOG.iter().filter(move |f| f.region == region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twenty_funds_per_region() {
        assert_eq!(FUND_CATALOG.len(), 60);
        for region in [Region::India, Region::Europe, Region::Us] {
            assert_eq!(funds_in(region).count(), 20);
        }
    }

    #[test]
    fn lookup_ignores_case_and_padding() {
        let entry = find_fund("  vanguard 500 index fund ").unwrap();
        assert_eq!(entry.name, "Vanguard 500 Index Fund");
        assert_eq!(entry.region, Region::Us);
        assert!(find_fund("Imaginary Alpha Fund").is_none());
    }
}
