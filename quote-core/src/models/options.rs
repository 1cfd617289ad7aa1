/// Budget brackets offered on the details step. Empty means unanswered.
pub const BUDGET_OPTIONS: [&str; 4] = ["<5k", "5k-10k", "10k-25k", "25k+"];

/// Delivery timelines offered on the details step. Empty means unanswered.
pub const TIMELINE_OPTIONS: [&str; 4] = ["ASAP", "1-2 months", "3-6 months", "6+ months"];
