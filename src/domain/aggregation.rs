use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entities::{global_tag, tag_entry};

/// Color used for entries whose name has no registry row (orphaned tags).
pub const DEFAULT_COLOR: i32 = 0xFF4B5563_u32 as i32;

/// Period buckets keep this many labels; the rest collapse into `extra_count`.
const TOP_LABELS_PER_BUCKET: usize = 2;

/// Display rollup for one tag name on one day (or one month-wide bucket).
#[derive(Serialize, Deserialize, PartialEq, Debug, Clone)]
pub struct TagSummary {
    pub name: String,
    pub color: i32,
    pub label: String,
    pub rating: Option<i16>,
    pub rating_count: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct DateSummary {
    pub date: NaiveDate,
    pub top_labels: Vec<String>,
    pub extra_count: usize,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct MonthSummary {
    pub month: u32,
    pub top_labels: Vec<String>,
    pub extra_count: usize,
}

impl TagSummary {
    /// Single-line form used by the week/month/year grids.
    pub fn compact_label(&self) -> String {
        let rating = match self.rating {
            Some(rating) => rating,
            None => return self.label.clone(),
        };
        let stars = "★".repeat(rating as usize) + &"☆".repeat(5 - rating as usize);
        if self.rating_count > 1 {
            format!("{} {} ({})", self.name, stars, self.rating_count)
        } else {
            format!("{} {}", self.name, stars)
        }
    }
}

/// Rolls the given entries up into one summary per tag name, ordered by
/// name ascending. Ratings take precedence over values for a whole group;
/// values merge distinct in first-occurrence order; plain duplicates count.
pub fn aggregate_day_tags(
    entries: &[tag_entry::Model],
    global_tags: &HashMap<String, global_tag::Model>,
    show_hidden_tags: bool,
) -> Vec<TagSummary> {
    let mut groups: BTreeMap<&str, Vec<&tag_entry::Model>> = BTreeMap::new();
    for entry in entries {
        groups.entry(entry.name.as_str()).or_default().push(entry);
    }

    let mut summaries = Vec::with_capacity(groups.len());
    for (name, group) in groups {
        let global_tag = global_tags.get(name);
        if !show_hidden_tags && global_tag.is_some_and(|tag| tag.hidden) {
            continue;
        }
        let color = global_tag.map(|tag| tag.color).unwrap_or(DEFAULT_COLOR);

        let ratings: Vec<i16> = group.iter().filter_map(|entry| entry.rating).collect();
        if !ratings.is_empty() {
            let mean =
                ratings.iter().map(|rating| f64::from(*rating)).sum::<f64>() / ratings.len() as f64;
            summaries.push(TagSummary {
                name: name.to_string(),
                color,
                label: name.to_string(),
                rating: Some((mean.round() as i16).clamp(1, 5)),
                rating_count: ratings.len(),
            });
            continue;
        }

        let mut values: Vec<&str> = Vec::new();
        for entry in &group {
            if let Some(value) = entry.value.as_deref() {
                if !value.is_empty() && !values.contains(&value) {
                    values.push(value);
                }
            }
        }
        let label = if !values.is_empty() {
            format!("{} ({})", name, values.join(", "))
        } else if group.len() > 1 {
            format!("{} ({})", name, group.len())
        } else {
            name.to_string()
        };
        summaries.push(TagSummary {
            name: name.to_string(),
            color,
            label,
            rating: None,
            rating_count: 0,
        });
    }
    summaries
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// First and last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).expect("day 1 exists in every month");
    let last = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .expect("month end within calendar range");
    (first, last)
}

pub fn group_entries_by_date(
    entries: Vec<tag_entry::Model>,
) -> HashMap<NaiveDate, Vec<tag_entry::Model>> {
    let mut entries_by_date: HashMap<NaiveDate, Vec<tag_entry::Model>> = HashMap::new();
    for entry in entries {
        entries_by_date.entry(entry.date).or_default().push(entry);
    }
    entries_by_date
}

/// One bucket per day of the Monday-starting week containing `reference`.
pub fn build_week_summary(
    reference: NaiveDate,
    entries_by_date: &HashMap<NaiveDate, Vec<tag_entry::Model>>,
    global_tags: &HashMap<String, global_tag::Model>,
    show_hidden_tags: bool,
) -> Vec<DateSummary> {
    let monday = week_start(reference);
    (0..7)
        .map(|offset| {
            build_date_summary(
                monday + Duration::days(offset),
                entries_by_date,
                global_tags,
                show_hidden_tags,
            )
        })
        .collect()
}

/// One bucket per day of the calendar month containing `reference`.
pub fn build_month_summary(
    reference: NaiveDate,
    entries_by_date: &HashMap<NaiveDate, Vec<tag_entry::Model>>,
    global_tags: &HashMap<String, global_tag::Model>,
    show_hidden_tags: bool,
) -> Vec<DateSummary> {
    let (first, last) = month_bounds(reference);
    first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| build_date_summary(date, entries_by_date, global_tags, show_hidden_tags))
        .collect()
}

/// Twelve month-wide buckets. Unlike the day grids, each bucket aggregates
/// the whole month's entries at once and orders labels by entry count
/// descending (case-insensitive name as tie-break) before truncation.
pub fn build_year_summary(
    year: i32,
    entries_by_date: &HashMap<NaiveDate, Vec<tag_entry::Model>>,
    global_tags: &HashMap<String, global_tag::Model>,
    show_hidden_tags: bool,
) -> Vec<MonthSummary> {
    (1..=12)
        .map(|month| {
            let mut month_entries: Vec<tag_entry::Model> = Vec::new();
            let first = NaiveDate::from_ymd_opt(year, month, 1)
                .expect("months 1-12 start on a valid day");
            let (_, last) = month_bounds(first);
            for date in first.iter_days().take_while(|date| *date <= last) {
                if let Some(entries) = entries_by_date.get(&date) {
                    month_entries.extend(entries.iter().cloned());
                }
            }

            let mut entry_counts: HashMap<&str, usize> = HashMap::new();
            for entry in &month_entries {
                *entry_counts.entry(entry.name.as_str()).or_insert(0) += 1;
            }

            let mut summaries =
                aggregate_day_tags(&month_entries, global_tags, show_hidden_tags);
            summaries.sort_by(|a, b| {
                let count_a = entry_counts.get(a.name.as_str()).copied().unwrap_or(0);
                let count_b = entry_counts.get(b.name.as_str()).copied().unwrap_or(0);
                count_b
                    .cmp(&count_a)
                    .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            });

            let mut top_labels: Vec<String> =
                summaries.iter().map(TagSummary::compact_label).collect();
            let extra_count = top_labels.len().saturating_sub(TOP_LABELS_PER_BUCKET);
            top_labels.truncate(TOP_LABELS_PER_BUCKET);
            MonthSummary {
                month,
                top_labels,
                extra_count,
            }
        })
        .collect()
}

fn build_date_summary(
    date: NaiveDate,
    entries_by_date: &HashMap<NaiveDate, Vec<tag_entry::Model>>,
    global_tags: &HashMap<String, global_tag::Model>,
    show_hidden_tags: bool,
) -> DateSummary {
    let empty = Vec::new();
    let entries = entries_by_date.get(&date).unwrap_or(&empty);
    let summaries = aggregate_day_tags(entries, global_tags, show_hidden_tags);

    let mut top_labels: Vec<String> = summaries.iter().map(TagSummary::compact_label).collect();
    let extra_count = top_labels.len().saturating_sub(TOP_LABELS_PER_BUCKET);
    top_labels.truncate(TOP_LABELS_PER_BUCKET);
    DateSummary {
        date,
        top_labels,
        extra_count,
    }
}
