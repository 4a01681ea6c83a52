use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Én normalisert loggrad: dato + antall minutter.
/// Flere observasjoner kan dele dato, de summeres i seriebyggeren.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivityObservation {
    pub date: NaiveDate,
    pub minutes: f64,
}

/// Månedsmål, allerede omregnet til minutter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthlyGoal {
    pub month: Month,
    pub goal_minutes: f64,
}

/// Ett punkt i den hull-fylte dagserien over hele historikken.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailySeriesPoint {
    pub date: NaiveDate,
    pub minutes: f64,
    pub cumulative_total: f64,
    pub moving_avg_60d: f64,
}

/// Ett punkt i månedsutsnittet. `monthly_cumulative` starter på null
/// ved månedsskiftet, uavhengig av totalsummen i dagserien.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthPoint {
    pub date: NaiveDate,
    pub minutes: f64,
    pub monthly_cumulative: f64,
    pub moving_avg_60d: f64,
}

/// Ett punkt på den lineære mållinjen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetPoint {
    pub date: NaiveDate,
    pub target_cumulative: f64,
}

/// Ferdig komponert månedsbilde: alt rendereren trenger, ingen
/// datoaritmetikk gjenstår hos mottakeren.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthView {
    pub month: Month,
    pub points: Vec<MonthPoint>,
    pub target_points: Vec<TargetPoint>,
    pub moving_avg_domain: [f64; 2],
}

/// Kalendermåned (år + månedsnummer 1-12). Dag i måneden er irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    /// Inneværende måned fra systemklokka.
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Første dag i måneden, normalisert ankerpunkt for utsnitt og oppslag.
    pub fn first_day(&self) -> NaiveDate {
        // month er 1-12, garantert av konstruktørene
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("Month holder 1-12")
    }

    /// Neste måned, med årsrulling ved desember.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    /// Forrige måned, med årsrulling ved januar.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Antall dager i måneden, korrekt også for skuddår.
    pub fn days_in_month(&self) -> u32 {
        self.next()
            .first_day()
            .signed_duration_since(self.first_day())
            .num_days() as u32
    }

    /// Faller datoen i intervallet [første dag, neste måneds første dag)?
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date < self.next().first_day()
    }

    /// Visningsetikett, f.eks. "2026-Feb."
    pub fn label(&self) -> String {
        self.first_day().format("%Y-%b.").to_string()
    }
}
