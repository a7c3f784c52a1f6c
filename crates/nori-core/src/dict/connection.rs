pub(super) const MAGIC: &[u8; 4] = b"NRCX";
pub(super) const VERSION: u8 = 1;
/// magic(4) + version(1) + num_ids(2)
pub(super) const HEADER_SIZE: usize = 4 + 1 + 2;

/// Square table of transition costs between adjacent morphemes.
///
/// Rows are indexed by the right context id of the preceding morpheme and
/// columns by the left context id of the following one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionMatrix {
    pub(super) num_ids: u16,
    pub(super) costs: Vec<i16>,
}

impl ConnectionMatrix {
    /// `costs` is row-major with `num_ids * num_ids` cells; missing cells are 0.
    pub fn new(num_ids: u16, mut costs: Vec<i16>) -> Self {
        costs.resize(num_ids as usize * num_ids as usize, 0);
        Self { num_ids, costs }
    }

    /// A matrix where every transition costs 0.
    pub fn zeroed(num_ids: u16) -> Self {
        Self::new(num_ids, Vec::new())
    }

    /// Cost of `right_id` (predecessor) followed by `left_id` (successor).
    /// Out-of-range ids cost 0.
    pub fn cost(&self, right_id: u16, left_id: u16) -> i16 {
        if right_id >= self.num_ids || left_id >= self.num_ids {
            return 0;
        }
        let idx = right_id as usize * self.num_ids as usize + left_id as usize;
        self.costs.get(idx).copied().unwrap_or(0)
    }

    pub fn set(&mut self, right_id: u16, left_id: u16, cost: i16) {
        if right_id < self.num_ids && left_id < self.num_ids {
            let idx = right_id as usize * self.num_ids as usize + left_id as usize;
            self.costs[idx] = cost;
        }
    }

    pub fn num_ids(&self) -> u16 {
        self.num_ids
    }

    pub fn contains_id(&self, id: u16) -> bool {
        id < self.num_ids
    }
}
