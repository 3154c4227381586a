use serde::Serialize;

pub const PART_RAIL_CLIPS: i64 = 1;
pub const PART_RUBBER_PAD: i64 = 2;
pub const PART_SLEEPER: i64 = 3;
pub const PART_LINER: i64 = 4;

pub const REGION_NORTH: i64 = 1;
pub const REGION_SOUTH: i64 = 2;
pub const REGION_EAST: i64 = 3;
pub const REGION_WEST: i64 = 4;
pub const REGION_CENTRAL: i64 = 5;
pub const REGION_NORTHEAST: i64 = 6;
pub const REGION_NORTHWEST: i64 = 7;
pub const REGION_SOUTHEAST: i64 = 8;

pub const ROUTE_HIGH_SPEED: i64 = 1;
pub const ROUTE_PASSENGER: i64 = 2;
pub const ROUTE_FREIGHT: i64 = 3;
pub const ROUTE_MIXED: i64 = 4;

/// A categorical input resolved to its numeric code. The caller's label is
/// kept verbatim because explanation strings quote it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub label: String,
    pub code: i64,
}

/// Static label-to-code lookup with a lenient default.
///
/// Unknown labels never fail: they resolve to `default_code`. Labels that
/// parse as integers are taken as codes directly.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable {
    pub name: &'static str,
    entries: &'static [(&'static str, i64)],
    default_code: i64,
}

pub static PART_TYPES: CategoryTable = CategoryTable {
    name: "part type",
    entries: &[
        ("Rail Clips", PART_RAIL_CLIPS),
        ("Rubber Pad", PART_RUBBER_PAD),
        ("Sleeper", PART_SLEEPER),
        ("Liner", PART_LINER),
    ],
    default_code: PART_RAIL_CLIPS,
};

pub static REGIONS: CategoryTable = CategoryTable {
    name: "region",
    entries: &[
        ("North", REGION_NORTH),
        ("South", REGION_SOUTH),
        ("East", REGION_EAST),
        ("West", REGION_WEST),
        ("Central", REGION_CENTRAL),
        ("Northeast", REGION_NORTHEAST),
        ("Northwest", REGION_NORTHWEST),
        ("Southeast", REGION_SOUTHEAST),
    ],
    default_code: REGION_NORTH,
};

pub static ROUTE_TYPES: CategoryTable = CategoryTable {
    name: "route type",
    entries: &[
        ("High Speed", ROUTE_HIGH_SPEED),
        ("Passenger", ROUTE_PASSENGER),
        ("Freight", ROUTE_FREIGHT),
        ("Mixed", ROUTE_MIXED),
    ],
    default_code: ROUTE_PASSENGER,
};

impl CategoryTable {
    pub fn code(&self, label: &str) -> i64 {
        let label = label.trim();
        if let Ok(code) = label.parse::<i64>() {
            return code;
        }
        self.entries
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
            .map_or(self.default_code, |(_, code)| *code)
    }

    pub fn resolve(&self, label: &str) -> Category {
        Category {
            label: label.to_string(),
            code: self.code(label),
        }
    }

    pub fn label_for(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| *name)
    }
}
