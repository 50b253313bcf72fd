//! Static cleaning-task catalog and rotation structures.
//!
//! Two parts, both in fixed declaration order:
//! - the regular task table, grouped by priority class and duration
//! - rotation entries: weekly-focus lists, the biweekly half-month pairs,
//!   the quarterly focus map, and the weekday essentials that have no
//!   regular-table counterpart
//!
//! Declaration order doubles as the tie-break when urgency scores are
//! equal, so the table order is part of the contract.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Nominal repetition bucket for a task.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
}

impl Cadence {
    /// All cadences in threshold order, for stats breakdowns.
    pub const ALL: [Cadence; 5] = [
        Cadence::Daily,
        Cadence::Weekly,
        Cadence::Biweekly,
        Cadence::Monthly,
        Cadence::Quarterly,
    ];

    /// Days after which a task of this cadence counts as due.
    pub fn threshold_days(&self) -> i64 {
        match self {
            Cadence::Daily => 3,
            Cadence::Weekly => 10,
            Cadence::Biweekly => 18,
            Cadence::Monthly => 35,
            Cadence::Quarterly => 100,
        }
    }

    /// Storage/display label.
    pub fn label(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
            Cadence::Biweekly => "biweekly",
            Cadence::Monthly => "monthly",
            Cadence::Quarterly => "quarterly",
        }
    }

    /// Parse a storage label. Unknown labels are rejected rather than
    /// silently defaulted; callers decide the fallback.
    pub fn from_label(label: &str) -> Option<Cadence> {
        match label {
            "daily" => Some(Cadence::Daily),
            "weekly" => Some(Cadence::Weekly),
            "biweekly" => Some(Cadence::Biweekly),
            "monthly" => Some(Cadence::Monthly),
            "quarterly" => Some(Cadence::Quarterly),
            _ => None,
        }
    }
}

/// Importance bucket; the weight scales urgency scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PriorityClass {
    /// Everyday must-do work.
    #[serde(rename = "core")]
    P1Core,
    /// Weekly upkeep.
    #[serde(rename = "upkeep")]
    P2Upkeep,
    /// Detail work on a longer cycle.
    #[serde(rename = "detail")]
    P3Detail,
    /// Deep cleans and delegable projects.
    #[serde(rename = "deep")]
    P4Deep,
}

impl PriorityClass {
    /// Multiplier applied to the cadence-elapsed ratio.
    pub fn weight(&self) -> f64 {
        match self {
            PriorityClass::P1Core => 3.0,
            PriorityClass::P2Upkeep => 2.0,
            PriorityClass::P3Detail => 1.0,
            PriorityClass::P4Deep => 0.5,
        }
    }
}

/// Rough effort estimate. Informational only; never feeds scoring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DurationBucket {
    #[serde(rename = "2min")]
    TwoMin,
    #[serde(rename = "5min")]
    FiveMin,
    #[serde(rename = "15min")]
    FifteenMin,
    #[serde(rename = "delegate")]
    Delegate,
}

impl DurationBucket {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            DurationBucket::TwoMin => "2min",
            DurationBucket::FiveMin => "5min",
            DurationBucket::FifteenMin => "15min",
            DurationBucket::Delegate => "delegate",
        }
    }
}

/// One catalog entry. The name doubles as display text and history key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaskDef {
    pub name: &'static str,
    pub cadence: Cadence,
    pub priority: PriorityClass,
    pub duration: DurationBucket,
}

const fn task(
    name: &'static str,
    cadence: Cadence,
    priority: PriorityClass,
    duration: DurationBucket,
) -> TaskDef {
    TaskDef {
        name,
        cadence,
        priority,
        duration,
    }
}

/// The regular task table, grouped by priority then duration.
pub static REGULAR_TASKS: &[TaskDef] = {
    use Cadence::*;
    use DurationBucket::*;
    use PriorityClass::*;
    &[
        // P1 core, 2min
        task("Wipe bathroom sink", Daily, P1Core, TwoMin),
        task("Check and clear clutter from hallway or entryway", Daily, P1Core, TwoMin),
        task("Quick-sort mail", Daily, P1Core, TwoMin),
        task("Wipe down bathroom faucet", Daily, P1Core, TwoMin),
        task("Put shoes in closet or bin", Daily, P1Core, TwoMin),
        // P1 core, 5min
        task("Unload dishwasher", Daily, P1Core, FiveMin),
        task("Scoop cat litter", Daily, P1Core, FiveMin),
        task("Clear and wipe kitchen counters", Daily, P1Core, FiveMin),
        task("Pick up floor clutter in main room", Daily, P1Core, FiveMin),
        task("Take out trash if full", Daily, P1Core, FiveMin),
        // P1 core, 15min
        task("Vacuum main living space", Daily, P1Core, FifteenMin),
        task("Load dishwasher and run if full", Daily, P1Core, FifteenMin),
        task("Wipe down stovetop", Daily, P1Core, FifteenMin),
        task("Empty and wipe bathroom trash", Daily, P1Core, FifteenMin),
        task("Clean coffee table", Daily, P1Core, FifteenMin),
        // P2 upkeep, 2min
        task("Replace kitchen towel", Weekly, P2Upkeep, TwoMin),
        task("Tidy couch cushions and blankets", Weekly, P2Upkeep, TwoMin),
        task("Water houseplants", Weekly, P2Upkeep, TwoMin),
        task("Wipe down door handles", Weekly, P2Upkeep, TwoMin),
        task("Refill toilet paper or soap", Weekly, P2Upkeep, TwoMin),
        // P2 upkeep, 5min
        task("Wipe down appliances", Weekly, P2Upkeep, FiveMin),
        task("Quick clean one mirror", Weekly, P2Upkeep, FiveMin),
        task("Tidy one shelf or counter", Weekly, P2Upkeep, FiveMin),
        task("Clean out one fridge shelf", Weekly, P2Upkeep, FiveMin),
        // P2 upkeep, 15min
        task("Mop kitchen and bathroom floors", Weekly, P2Upkeep, FifteenMin),
        task("Wipe switches and doorknobs", Weekly, P2Upkeep, FifteenMin),
        task("Clean bathroom toilet and sink thoroughly", Weekly, P2Upkeep, FifteenMin),
        task("Replace bath towels", Weekly, P2Upkeep, FifteenMin),
        // P3 detail, 2min
        task("Dust light fixtures", Biweekly, P3Detail, TwoMin),
        task("Dust electronics", Biweekly, P3Detail, TwoMin),
        task("Straighten bathroom items", Biweekly, P3Detail, TwoMin),
        task("Spot check corners for cobwebs", Biweekly, P3Detail, TwoMin),
        task("Check expiration dates on fridge items", Biweekly, P3Detail, TwoMin),
        // P3 detail, 5min
        task("Wipe cabinet fronts", Biweekly, P3Detail, FiveMin),
        task("Clean cat food area", Biweekly, P3Detail, FiveMin),
        task("Wipe fridge handle and exterior", Biweekly, P3Detail, FiveMin),
        task("Organize one drawer", Biweekly, P3Detail, FiveMin),
        task("Wipe baseboards in one room", Biweekly, P3Detail, FiveMin),
        // P3 detail, 15min: the monthly visual-impact set
        task("Dust entire bedroom or office", Monthly, P3Detail, FifteenMin),
        task("Clean out medicine cabinet", Monthly, P3Detail, FifteenMin),
        task("Reorganize pantry zone", Monthly, P3Detail, FifteenMin),
        task("Clean behind microwave", Monthly, P3Detail, FifteenMin),
        task("Deep clean one appliance", Monthly, P3Detail, FifteenMin),
        task("Clean cycle on coffee maker", Monthly, P3Detail, FifteenMin),
        task("Clean cycle on dishwasher", Monthly, P3Detail, FifteenMin),
        task("Dust ceiling fans and light fixtures", Monthly, P3Detail, FifteenMin),
        task("Clean baseboards and molding", Monthly, P3Detail, FifteenMin),
        task("Vacuum upholstered furniture", Monthly, P3Detail, FifteenMin),
        task(
            "Clean kitchen sink drain with baking soda and vinegar",
            Monthly,
            P3Detail,
            FifteenMin,
        ),
        task(
            "Launder shower curtain and liner (don't use dryer!)",
            Monthly,
            P3Detail,
            FifteenMin,
        ),
        // P4 deep, 15min
        task("Vacuum under couch", Quarterly, P4Deep, FifteenMin),
        task("Dust and rotate books", Quarterly, P4Deep, FifteenMin),
        task("Wipe window tracks", Quarterly, P4Deep, FifteenMin),
        task("Clean washing machine filter", Quarterly, P4Deep, FifteenMin),
        task("Check fire alarm batteries", Quarterly, P4Deep, FifteenMin),
        task("Rotate mattress", Quarterly, P4Deep, FifteenMin),
        task("Wash trashcans and recycling bins", Quarterly, P4Deep, FifteenMin),
        task("Declutter storage spaces", Quarterly, P4Deep, FifteenMin),
        task("Check water filter and water softner", Quarterly, P4Deep, FifteenMin),
        task("Wash curtains or blinds", Quarterly, P4Deep, FifteenMin),
        // P4 deep, delegate
        task("Clean behind large appliances", Quarterly, P4Deep, Delegate),
        task("Organize storage closet", Quarterly, P4Deep, Delegate),
        task("Sort donation bin", Quarterly, P4Deep, Delegate),
    ]
};

/// Catalog entries for every task referenced by a rotation structure or the
/// weekday essentials but absent from the regular table. Keeps the lookup
/// invariant: every recommendable name scores with real metadata.
pub static ROTATION_TASKS: &[TaskDef] = {
    use Cadence::*;
    use DurationBucket::*;
    use PriorityClass::*;
    &[
        // Weekly focus: Kitchen
        task("Wipe down kitchen counters completely", Weekly, P2Upkeep, FiveMin),
        task("Quick-clean inside microwave with damp cloth", Weekly, P2Upkeep, FiveMin),
        task(
            "Wipe refrigerator handles and most-touched shelves",
            Weekly,
            P2Upkeep,
            TwoMin,
        ),
        // Weekly focus: Bathroom
        task(
            "Clean bathroom sink, faucet, and immediate counter area",
            Weekly,
            P2Upkeep,
            FiveMin,
        ),
        task("Scrub toilet bowl and wipe exterior surfaces", Weekly, P2Upkeep, FiveMin),
        task("Replace bathroom hand/face towels", Weekly, P2Upkeep, TwoMin),
        // Weekly focus: Living Area
        task("Quick-tidy living room sitting area", Weekly, P2Upkeep, FiveMin),
        task(
            "Gather and put away items that belong in another room",
            Weekly,
            P2Upkeep,
            FiveMin,
        ),
        task(
            "Clear and wipe dining/coffee table completely",
            Weekly,
            P2Upkeep,
            FiveMin,
        ),
        // Weekly focus: Bedroom/Pet
        task("Organize nightstand for better function", Weekly, P2Upkeep, FiveMin),
        task("Sort through one drawer of clothing", Weekly, P2Upkeep, FifteenMin),
        task("Clean litter box completely", Weekly, P2Upkeep, FifteenMin),
        // Biweekly pair, first half
        task("Full shower/tub cleaning", Biweekly, P1Core, FifteenMin),
        task(
            "Complete toilet cleaning (bowl, tank, base, surrounding floor)",
            Biweekly,
            P1Core,
            FifteenMin,
        ),
        task("Full kitchen counter and sink cleaning", Biweekly, P1Core, FifteenMin),
        // Biweekly pair, second half
        task(
            "Change bed linens (fitted sheet, pillowcases)",
            Biweekly,
            P1Core,
            FifteenMin,
        ),
        task("Refrigerator clean-out of expired foods", Biweekly, P1Core, FifteenMin),
        task(
            "Kitchen sink deep clean including disposal and drain",
            Biweekly,
            P1Core,
            FifteenMin,
        ),
        // Quarterly focus map
        task("Bathroom deep clean (grout, fans, etc.)", Quarterly, P4Deep, Delegate),
        task("Kitchen deep clean (inside appliances, etc.)", Quarterly, P4Deep, Delegate),
        task(
            "Living areas deep clean (under furniture, etc.)",
            Quarterly,
            P4Deep,
            Delegate,
        ),
        task("Bedroom deep clean (mattress, closets, etc.)", Quarterly, P4Deep, Delegate),
        // Weekday essentials without a regular-table counterpart
        task("Pick up floor clutter in all rooms", Daily, P1Core, FiveMin),
        task("Take out trash and recycling", Daily, P1Core, FiveMin),
        task("Wipe bathroom sink and toilet quick-clean", Daily, P1Core, FiveMin),
    ]
};

/// Every catalog entry: the regular table followed by the rotation entries.
pub fn all_tasks() -> impl Iterator<Item = &'static TaskDef> {
    REGULAR_TASKS.iter().chain(ROTATION_TASKS.iter())
}

/// Look up a task by name across the whole catalog.
pub fn find(name: &str) -> Option<&'static TaskDef> {
    all_tasks().find(|t| t.name == name)
}

/// Weekly focus areas in rotation order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FocusArea {
    Kitchen,
    Bathroom,
    LivingArea,
    BedroomPet,
}

impl FocusArea {
    pub const ROTATION: [FocusArea; 4] = [
        FocusArea::Kitchen,
        FocusArea::Bathroom,
        FocusArea::LivingArea,
        FocusArea::BedroomPet,
    ];

    /// Focus area for an ISO week number: `(week - 1) mod 4`.
    pub fn for_week(iso_week: u32) -> FocusArea {
        Self::ROTATION[(iso_week.saturating_sub(1) % 4) as usize]
    }

    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            FocusArea::Kitchen => "Kitchen",
            FocusArea::Bathroom => "Bathroom",
            FocusArea::LivingArea => "Living Area",
            FocusArea::BedroomPet => "Bedroom/Pet",
        }
    }

    /// The three weekly tasks under this focus.
    pub fn tasks(&self) -> &'static [&'static str] {
        match self {
            FocusArea::Kitchen => &[
                "Wipe down kitchen counters completely",
                "Quick-clean inside microwave with damp cloth",
                "Wipe refrigerator handles and most-touched shelves",
            ],
            FocusArea::Bathroom => &[
                "Clean bathroom sink, faucet, and immediate counter area",
                "Scrub toilet bowl and wipe exterior surfaces",
                "Replace bathroom hand/face towels",
            ],
            FocusArea::LivingArea => &[
                "Quick-tidy living room sitting area",
                "Gather and put away items that belong in another room",
                "Clear and wipe dining/coffee table completely",
            ],
            FocusArea::BedroomPet => &[
                "Organize nightstand for better function",
                "Sort through one drawer of clothing",
                "Clean litter box completely",
            ],
        }
    }
}

/// Which half of the biweekly pairing applies this week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiweeklyPhase {
    FirstHalf,
    SecondHalf,
}

impl BiweeklyPhase {
    /// Even ISO weeks take the first list, odd weeks the second.
    pub fn for_week(iso_week: u32) -> BiweeklyPhase {
        if iso_week % 2 == 0 {
            BiweeklyPhase::FirstHalf
        } else {
            BiweeklyPhase::SecondHalf
        }
    }

    /// The fixed task list for this half.
    pub fn tasks(&self) -> &'static [&'static str] {
        match self {
            BiweeklyPhase::FirstHalf => &[
                "Full shower/tub cleaning",
                "Complete toilet cleaning (bowl, tank, base, surrounding floor)",
                "Full kitchen counter and sink cleaning",
            ],
            BiweeklyPhase::SecondHalf => &[
                "Change bed linens (fitted sheet, pillowcases)",
                "Refrigerator clean-out of expired foods",
                "Kitchen sink deep clean including disposal and drain",
            ],
        }
    }
}

/// The designated deep-clean task for a calendar quarter (1-4).
pub fn quarterly_focus(quarter: u32) -> &'static str {
    match quarter {
        1 => "Bathroom deep clean (grout, fans, etc.)",
        2 => "Kitchen deep clean (inside appliances, etc.)",
        3 => "Living areas deep clean (under furniture, etc.)",
        _ => "Bedroom deep clean (mattress, closets, etc.)",
    }
}

/// Placeholder shown instead of tasks on Sundays. Not a catalog entry.
pub const REST_DAY: &str = "REST DAY - No cleaning required";

/// The one fixed task always offered first on each weekday.
pub fn essential_task(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Clear and wipe kitchen counters",
        Weekday::Tue => "Pick up floor clutter in all rooms",
        Weekday::Wed => "Take out trash and recycling",
        Weekday::Thu => "Clean coffee table",
        Weekday::Fri => "Wipe bathroom sink and toilet quick-clean",
        Weekday::Sat => "Vacuum main living space",
        Weekday::Sun => REST_DAY,
    }
}
