/// Cartesian coordinates of one atom record, in Å.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise midpoint between `self` and `other`.
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// Component-wise arithmetic mean. `None` for an empty iterator.
    pub fn mean<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let mut count = 0usize;
        let mut sum = Coord::default();
        for coord in coords {
            sum.x += coord.x;
            sum.y += coord.y;
            sum.z += coord.z;
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let n = count as f64;
        Some(Coord {
            x: sum.x / n,
            y: sum.y / n,
            z: sum.z / n,
        })
    }
}

/// One coordinate record parsed from an `ATOM`/`HETATM` line.
///
/// Fields are stored as parsed, including incidental whitespace in the
/// chain identifier and atom-name padding, so that writing a record back
/// reproduces the fixed-column layout. Comparisons go through the trimmed
/// accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct AtomRecord {
    pub serial: i32,
    pub record_name: String,
    pub atom_name: String,
    pub alt_loc: Option<char>,
    pub residue_name: String,
    pub chain_id: String,
    pub residue_seq: i32,
    pub insertion_code: Option<char>,
    pub coord: Coord,
    pub occupancy: f64,
    pub b_factor: f64,
    pub element: Option<String>,
}

impl AtomRecord {
    /// True for records carrying the `ATOM` marker. `HETATM` records are
    /// parsed but never take part in alignment.
    pub fn is_atom(&self) -> bool {
        self.record_name.trim() == "ATOM"
    }

    /// Chain label with incidental whitespace removed.
    pub fn chain(&self) -> &str {
        self.chain_id.trim()
    }

    /// Positional label (atom name) without column padding.
    pub fn name(&self) -> &str {
        self.atom_name.trim()
    }

    /// Residue 3-letter code without column padding.
    pub fn residue(&self) -> &str {
        self.residue_name.trim()
    }

    /// True for the alpha-carbon record of a residue.
    pub fn is_alpha_carbon(&self) -> bool {
        self.name() == "CA"
    }
}
