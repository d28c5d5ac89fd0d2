use chrono::{NaiveDate, NaiveTime};

use crate::calendar::{Event, Task};
use crate::create_flow::EntityKind;
use crate::store::CalendarStore;

/// One row in a day's agenda: either an event or a task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgendaItem<'a> {
    Event(&'a Event),
    Task(&'a Task),
}

impl<'a> AgendaItem<'a> {
    pub fn kind(&self) -> EntityKind {
        match self {
            AgendaItem::Event(_) => EntityKind::Event,
            AgendaItem::Task(_) => EntityKind::Task,
        }
    }

    pub fn id(&self) -> &'a str {
        match self {
            AgendaItem::Event(e) => &e.id,
            AgendaItem::Task(t) => &t.id,
        }
    }

    pub fn title(&self) -> &'a str {
        match self {
            AgendaItem::Event(e) => &e.title,
            AgendaItem::Task(t) => &t.title,
        }
    }

    pub fn all_day(&self) -> bool {
        match self {
            AgendaItem::Event(e) => e.all_day,
            AgendaItem::Task(t) => t.all_day,
        }
    }

    /// Time the item starts on `date`; events carried over from an earlier
    /// day start at midnight.
    pub fn time_on(&self, date: NaiveDate) -> Option<NaiveTime> {
        if self.all_day() {
            return None;
        }
        match self {
            AgendaItem::Event(e) if e.start.date() < date => Some(NaiveTime::MIN),
            AgendaItem::Event(e) => Some(e.start.time()),
            AgendaItem::Task(t) => Some(t.date.time()),
        }
    }

    pub fn time_label(&self, date: NaiveDate) -> String {
        match (self, self.time_on(date)) {
            (_, None) => "All day".to_string(),
            (AgendaItem::Event(e), Some(start)) => {
                let end = if e.end.date() > date { "24:00".to_string() } else { e.end.format("%H:%M").to_string() };
                format!("{}-{}", start.format("%H:%M"), end)
            }
            (AgendaItem::Task(_), Some(at)) => at.format("%H:%M").to_string(),
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, AgendaItem::Task(t) if t.is_done())
    }
}

/// Owned snapshot of an agenda item for the layout structs.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryBlock {
    pub kind: EntityKind,
    pub id: String,
    pub title: String,
    pub time_label: String,
    pub all_day: bool,
    pub done: bool,
    pub color: Option<(u8, u8, u8)>,
}

impl EntryBlock {
    pub fn from_item(item: &AgendaItem<'_>, date: NaiveDate, store: &CalendarStore) -> Self {
        let color = match item {
            AgendaItem::Event(e) => store.calendar(&e.calendar_id).and_then(|c| c.rgb()),
            AgendaItem::Task(_) => None,
        };
        Self {
            kind: item.kind(),
            id: item.id().to_string(),
            title: item.title().to_string(),
            time_label: item.time_label(date),
            all_day: item.all_day(),
            done: item.is_done(),
            color,
        }
    }
}

/// Everything shown for `date`: events on visible calendars, then tasks when
/// enabled. All-day items lead, timed items follow in start order.
pub fn agenda_for(store: &CalendarStore, date: NaiveDate, show_tasks: bool) -> Vec<AgendaItem<'_>> {
    let mut items: Vec<AgendaItem<'_>> = store
        .events_between(date, date)
        .into_iter()
        .map(AgendaItem::Event)
        .collect();
    if show_tasks {
        items.extend(store.tasks_between(date, date).into_iter().map(AgendaItem::Task));
    }
    items.sort_by_key(|item| (item.time_on(date).is_some(), item.time_on(date)));
    items
}
