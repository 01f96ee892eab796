//! Taxonomy table: sector → member companies
//!
//! A company listed under more than one sector is attributed to the sector
//! that lists it first; later listings are dropped and reported.

use crate::graph::Sector;
use indexmap::map::Entry;
use indexmap::IndexMap;

const INFORMATION_TECHNOLOGY: &[&str] = &[
    "Apple Inc.", "Microsoft Corporation", "NVIDIA Corporation", "Broadcom Inc.", "Adobe Inc.",
    "Salesforce Inc.", "Advanced Micro Devices Inc.", "Cisco Systems Inc.",
    "Oracle Corporation", "Accenture plc", "Intel Corporation", "Intuit Inc.",
    "ServiceNow Inc.", "Qualcomm Inc.", "Applied Materials Inc.",
    "Automatic Data Processing Inc.", "Texas Instruments Inc.", "Lam Research Corporation",
    "Palo Alto Networks Inc.", "Synopsys Inc.", "Cadence Design Systems Inc.",
    "KLA Corporation", "Microchip Technology Inc.", "Micron Technology Inc.", "ANSYS Inc.",
    "Fortinet Inc.", "Arista Networks Inc.", "Roper Technologies Inc.", "Autodesk Inc.",
    "Amphenol Corporation", "ON Semiconductor Corporation", "Marvell Technology Inc.",
    "Keysight Technologies Inc.", "Teradyne Inc.", "Skyworks Solutions Inc.",
    "NXP Semiconductors N.V.", "CDW Corporation", "PTC Inc.", "Tyler Technologies Inc.",
    "Zebra Technologies Corporation", "Trimble Inc.", "Paycom Software Inc.",
    "Ceridian HCM Holding Inc.", "EPAM Systems Inc.", "Gen Digital Inc.",
];

const COMMUNICATION_SERVICES: &[&str] = &[
    "Alphabet Inc.", "Meta Platforms Inc.", "Netflix Inc.", "Comcast Corporation",
    "Walt Disney Company", "Verizon Communications Inc.", "AT&T Inc.", "T-Mobile US Inc.",
    "Charter Communications Inc.", "Activision Blizzard Inc.", "Electronic Arts Inc.",
    "Take-Two Interactive Software Inc.", "Warner Bros. Discovery Inc.", "Paramount Global",
    "Fox Corporation", "Live Nation Entertainment Inc.", "Omnicom Group Inc.",
    "Interpublic Group of Companies Inc.", "News Corporation", "Match Group Inc.",
];

const CONSUMER_DISCRETIONARY: &[&str] = &[
    "Amazon.com Inc.", "Tesla Inc.", "Home Depot Inc.", "McDonald's Corporation", "Nike Inc.",
    "Lowe's Companies Inc.", "Starbucks Corporation", "Booking Holdings Inc.",
    "TJX Companies Inc.", "Target Corporation", "Chipotle Mexican Grill Inc.",
    "General Motors Company", "Ford Motor Company", "Ross Stores Inc.",
    "Marriott International Inc.", "Hilton Worldwide Holdings Inc.", "O'Reilly Automotive Inc.",
    "AutoZone Inc.", "Darden Restaurants Inc.", "Yum! Brands Inc.", "Aptiv PLC",
    "Expedia Group Inc.", "Las Vegas Sands Corp.", "Royal Caribbean Cruises Ltd.",
    "Ulta Beauty Inc.", "Best Buy Co. Inc.", "Dollar General Corporation", "Dollar Tree Inc.",
    "Genuine Parts Company", "Bath & Body Works Inc.", "Caesars Entertainment Inc.",
    "MGM Resorts International", "Carnival Corporation", "Norwegian Cruise Line Holdings Ltd.",
    "Whirlpool Corporation", "Mohawk Industries Inc.", "Etsy Inc.", "eBay Inc.", "CarMax Inc.",
    "Tapestry Inc.",
];

const CONSUMER_STAPLES: &[&str] = &[
    "Procter & Gamble Company", "Costco Wholesale Corporation", "Walmart Inc.",
    "Coca-Cola Company", "PepsiCo Inc.", "Philip Morris International Inc.",
    "Mondelez International Inc.", "Altria Group Inc.", "Colgate-Palmolive Company",
    "General Mills Inc.", "Kimberly-Clark Corporation", "Estee Lauder Companies Inc.",
    "Kraft Heinz Company", "Sysco Corporation", "Archer-Daniels-Midland Company",
    "Kroger Company", "Hershey Company", "Kellogg Company", "McCormick & Company Inc.",
    "Constellation Brands Inc.", "Brown-Forman Corporation", "Molson Coors Beverage Company",
    "Campbell Soup Company", "Hormel Foods Corporation", "J.M. Smucker Company",
    "Church & Dwight Co. Inc.", "Lamb Weston Holdings Inc.", "Tyson Foods Inc.",
    "Conagra Brands Inc.", "Clorox Company",
];

const HEALTH_CARE: &[&str] = &[
    "UnitedHealth Group Inc.", "Johnson & Johnson", "Eli Lilly and Company", "Merck & Co. Inc.",
    "AbbVie Inc.", "Pfizer Inc.", "Thermo Fisher Scientific Inc.", "Abbott Laboratories",
    "Danaher Corporation", "Bristol-Myers Squibb Company", "Amgen Inc.", "Gilead Sciences Inc.",
    "CVS Health Corporation", "Elevance Health Inc.", "Intuitive Surgical Inc.",
    "Regeneron Pharmaceuticals Inc.", "Vertex Pharmaceuticals Inc.", "Cigna Group",
    "Becton Dickinson and Company", "Stryker Corporation", "Boston Scientific Corporation",
    "Medtronic plc", "Zoetis Inc.", "Edwards Lifesciences Corporation",
    "IDEXX Laboratories Inc.", "McKesson Corporation", "HCA Healthcare Inc.", "Humana Inc.",
    "Centene Corporation", "Molina Healthcare Inc.", "IQVIA Holdings Inc.", "ResMed Inc.",
    "Align Technology Inc.", "West Pharmaceutical Services Inc.", "DexCom Inc.",
    "Baxter International Inc.", "Zimmer Biomet Holdings Inc.", "Hologic Inc.", "Biogen Inc.",
    "Moderna Inc.", "Agilent Technologies Inc.", "Bio-Rad Laboratories Inc.",
    "Waters Corporation", "Illumina Inc.", "Viatris Inc.",
];

const FINANCIALS: &[&str] = &[
    "Berkshire Hathaway Inc.", "JPMorgan Chase & Co.", "Visa Inc.", "Mastercard Inc.",
    "Bank of America Corporation", "Wells Fargo & Company", "Morgan Stanley",
    "Goldman Sachs Group Inc.", "Charles Schwab Corporation", "BlackRock Inc.",
    "S&P Global Inc.", "Citigroup Inc.", "American Express Company",
    "PNC Financial Services Group Inc.", "U.S. Bancorp", "Truist Financial Corporation",
    "CME Group Inc.", "Progressive Corporation", "Chubb Limited",
    "Intercontinental Exchange Inc.", "Marsh & McLennan Companies Inc.", "Aon plc",
    "MetLife Inc.", "Aflac Incorporated", "Travelers Companies Inc.",
    "American International Group Inc.", "Prudential Financial Inc.", "Allstate Corporation",
    "Capital One Financial Corporation", "Moody's Corporation", "MSCI Inc.",
    "Discover Financial Services", "Fifth Third Bancorp", "KeyCorp",
    "Huntington Bancshares Incorporated", "State Street Corporation",
    "Northern Trust Corporation", "Comerica Incorporated", "Regions Financial Corporation",
    "Zions Bancorporation", "M&T Bank Corporation", "First Republic Bank",
    "Synchrony Financial", "Raymond James Financial Inc.", "T. Rowe Price Group Inc.",
    "Franklin Resources Inc.", "Invesco Ltd.", "Ameriprise Financial Inc.",
    "Principal Financial Group Inc.", "Lincoln National Corporation",
];

const INDUSTRIALS: &[&str] = &[
    "Caterpillar Inc.", "General Electric Company", "Union Pacific Corporation",
    "Honeywell International Inc.", "Boeing Company", "RTX Corporation",
    "United Parcel Service Inc.", "Lockheed Martin Corporation", "Deere & Company",
    "Northrop Grumman Corporation", "General Dynamics Corporation", "FedEx Corporation",
    "CSX Corporation", "Norfolk Southern Corporation", "3M Company",
    "L3Harris Technologies Inc.", "Illinois Tool Works Inc.", "Parker-Hannifin Corporation",
    "Eaton Corporation plc", "Emerson Electric Co.", "PACCAR Inc.", "Trane Technologies plc",
    "Johnson Controls International plc", "Rockwell Automation Inc.",
    "Carrier Global Corporation", "Fortive Corporation", "AMETEK Inc.",
    "Stanley Black & Decker Inc.", "Dover Corporation", "Otis Worldwide Corporation",
    "Cintas Corporation", "Republic Services Inc.", "Waste Management Inc.",
    "Verisk Analytics Inc.", "Copart Inc.", "Old Dominion Freight Line Inc.",
    "JB Hunt Transport Services Inc.", "CH Robinson Worldwide Inc.",
    "Expeditors International of Washington Inc.", "XPO Inc.", "Southwest Airlines Co.",
    "Delta Air Lines Inc.", "United Airlines Holdings Inc.", "American Airlines Group Inc.",
    "Alaska Air Group Inc.", "Howmet Aerospace Inc.", "TransDigm Group Inc.", "Textron Inc.",
    "Leidos Holdings Inc.", "Jacobs Solutions Inc.",
];

const ENERGY: &[&str] = &[
    "Exxon Mobil Corporation", "Chevron Corporation", "ConocoPhillips", "Schlumberger Limited",
    "EOG Resources Inc.", "Pioneer Natural Resources Company", "Marathon Petroleum Corporation",
    "Phillips 66", "Valero Energy Corporation", "Occidental Petroleum Corporation",
    "Williams Companies Inc.", "Kinder Morgan Inc.", "Hess Corporation",
    "Devon Energy Corporation", "ONEOK Inc.", "Baker Hughes Company", "Diamondback Energy Inc.",
    "Halliburton Company", "Coterra Energy Inc.", "Marathon Oil Corporation",
    "Targa Resources Corp.", "APA Corporation", "EQT Corporation", "Ovintiv Inc.",
];

const UTILITIES: &[&str] = &[
    "NextEra Energy Inc.", "Duke Energy Corporation", "Southern Company",
    "Dominion Energy Inc.", "American Electric Power Company Inc.", "Sempra",
    "Exelon Corporation", "Xcel Energy Inc.", "WEC Energy Group Inc.",
    "Consolidated Edison Inc.", "Public Service Enterprise Group Inc.", "Eversource Energy",
    "Edison International", "DTE Energy Company", "Entergy Corporation",
    "CenterPoint Energy Inc.", "Ameren Corporation", "PPL Corporation", "FirstEnergy Corp.",
    "Atmos Energy Corporation", "AES Corporation", "CMS Energy Corporation", "Evergy Inc.",
    "Alliant Energy Corporation", "Pinnacle West Capital Corporation", "NiSource Inc.",
    "NRG Energy Inc.", "American Water Works Company Inc.",
];

const REAL_ESTATE: &[&str] = &[
    "Prologis Inc.", "American Tower Corporation", "Equinix Inc.", "Crown Castle Inc.",
    "Public Storage", "Realty Income Corporation", "Digital Realty Trust Inc.",
    "Simon Property Group Inc.", "Welltower Inc.", "CBRE Group Inc.",
    "Extra Space Storage Inc.", "SBA Communications Corporation", "AvalonBay Communities Inc.",
    "Equity Residential", "Ventas Inc.", "Alexandria Real Estate Equities Inc.",
    "Vornado Realty Trust", "Boston Properties Inc.", "Invitation Homes Inc.",
    "Iron Mountain Inc.", "Kimco Realty Corporation", "Mid-America Apartment Communities Inc.",
    "Essex Property Trust Inc.", "UDR Inc.", "Healthpeak Properties Inc.",
    "Host Hotels & Resorts Inc.", "Regency Centers Corporation",
    "Federal Realty Investment Trust", "Camden Property Trust", "Sun Communities Inc.",
];

const MATERIALS: &[&str] = &[
    "Linde plc", "Sherwin-Williams Company", "Air Products and Chemicals Inc.",
    "Freeport-McMoRan Inc.", "Ecolab Inc.", "Newmont Corporation", "Nucor Corporation",
    "DuPont de Nemours Inc.", "PPG Industries Inc.", "Dow Inc.", "Corteva Inc.",
    "CF Industries Holdings Inc.", "Ball Corporation", "Vulcan Materials Company",
    "Martin Marietta Materials Inc.", "International Paper Company",
    "Packaging Corporation of America", "Avery Dennison Corporation", "Albemarle Corporation",
    "Celanese Corporation", "FMC Corporation", "Westrock Company", "Sealed Air Corporation",
    "Eastman Chemical Company", "International Flavors & Fragrances Inc.", "Mosaic Company",
    "Steel Dynamics Inc.", "Cleveland-Cliffs Inc.", "Reliance Steel & Aluminum Co.",
    "Amcor plc",
];
/// A name dropped during flattening because an earlier sector already listed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMember {
    pub name: String,
    pub kept: Sector,
    pub dropped: Sector,
}

/// Taxonomy members in traversal order, one entry per distinct name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlatTaxonomy {
    pub members: Vec<(String, Sector)>,
    pub duplicates: Vec<DuplicateMember>,
}

/// Ordered mapping of sector to member company names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    sectors: IndexMap<Sector, Vec<String>>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in S&P 500 subset covering all 11 GICS sectors
    pub fn sp500() -> Self {
        Self::from_sectors([
            (Sector::InformationTechnology, INFORMATION_TECHNOLOGY),
            (Sector::CommunicationServices, COMMUNICATION_SERVICES),
            (Sector::ConsumerDiscretionary, CONSUMER_DISCRETIONARY),
            (Sector::ConsumerStaples, CONSUMER_STAPLES),
            (Sector::HealthCare, HEALTH_CARE),
            (Sector::Financials, FINANCIALS),
            (Sector::Industrials, INDUSTRIALS),
            (Sector::Energy, ENERGY),
            (Sector::Utilities, UTILITIES),
            (Sector::RealEstate, REAL_ESTATE),
            (Sector::Materials, MATERIALS),
        ])
    }

    /// Build a taxonomy from `(sector, members)` pairs, in the given order
    pub fn from_sectors<I, M, S>(sectors: I) -> Self
    where
        I: IntoIterator<Item = (Sector, M)>,
        M: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut taxonomy = Self::new();
        for (sector, members) in sectors {
            for name in members {
                taxonomy.add(sector, name.as_ref());
            }
        }
        taxonomy
    }

    /// Append a member to a sector; a new sector goes after all existing ones
    pub fn add(&mut self, sector: Sector, name: impl Into<String>) {
        self.sectors.entry(sector).or_default().push(name.into());
    }

    pub fn sectors(&self) -> impl Iterator<Item = (Sector, &[String])> {
        self.sectors.iter().map(|(sector, names)| (*sector, names.as_slice()))
    }

    /// Total listings, duplicates included
    pub fn len(&self) -> usize {
        self.sectors.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten in traversal order, keeping the first listing of each name
    pub fn flatten(&self) -> FlatTaxonomy {
        let mut seen: IndexMap<&str, Sector> = IndexMap::with_capacity(self.len());
        let mut duplicates = Vec::new();

        for (sector, names) in &self.sectors {
            for name in names {
                match seen.entry(name.as_str()) {
                    Entry::Vacant(slot) => {
                        slot.insert(*sector);
                    }
                    Entry::Occupied(slot) => duplicates.push(DuplicateMember {
                        name: name.clone(),
                        kept: *slot.get(),
                        dropped: *sector,
                    }),
                }
            }
        }

        FlatTaxonomy {
            members: seen
                .into_iter()
                .map(|(name, sector)| (name.to_string(), sector))
                .collect(),
            duplicates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sp500_covers_every_sector() {
        let taxonomy = Taxonomy::sp500();
        let sectors: Vec<Sector> = taxonomy.sectors().map(|(s, _)| s).collect();
        assert_eq!(sectors, Sector::ALL.to_vec());

        let flat = taxonomy.flatten();
        assert!(flat.duplicates.is_empty());
        assert_eq!(flat.members.len(), taxonomy.len());
        assert_eq!(flat.members[0], ("Apple Inc.".to_string(), Sector::InformationTechnology));
    }

    #[test]
    fn test_first_listing_wins() {
        let taxonomy = Taxonomy::from_sectors([
            (Sector::Energy, vec!["Shared Co", "Oil Co"]),
            (Sector::Utilities, vec!["Grid Co", "Shared Co"]),
        ]);
        let flat = taxonomy.flatten();

        let names: Vec<&str> = flat.members.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Shared Co", "Oil Co", "Grid Co"]);
        assert_eq!(flat.members[0].1, Sector::Energy);
        assert_eq!(
            flat.duplicates,
            vec![DuplicateMember {
                name: "Shared Co".to_string(),
                kept: Sector::Energy,
                dropped: Sector::Utilities,
            }]
        );
    }

    #[test]
    fn test_repeated_sector_extends_in_place() {
        let mut taxonomy = Taxonomy::new();
        taxonomy.add(Sector::Energy, "A");
        taxonomy.add(Sector::Materials, "B");
        taxonomy.add(Sector::Energy, "C");

        let flat = taxonomy.flatten();
        let names: Vec<&str> = flat.members.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
        assert_eq!(taxonomy.len(), 3);
    }
}
