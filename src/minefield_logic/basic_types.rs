pub type SizeType = usize;

// Positions are always (x, y): x selects the column, y selects the row.
pub type Position = (SizeType, SizeType);
