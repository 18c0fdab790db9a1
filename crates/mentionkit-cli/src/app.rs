use mentionkit_engine::{
    Debouncer, KeywordByTrigger, MentionSession, PartType, Position, Suggestion,
    filter_suggestions,
    text::{byte_offset, char_len},
};
use std::time::{Duration, Instant};

/// Suggestion list state: which trigger is open and what has been typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuery {
    pub trigger: char,
    pub keyword: String,
}

pub struct App {
    session: MentionSession,
    candidates: Vec<Suggestion>,
    debouncer: Debouncer<KeywordByTrigger>,
    query: Option<ActiveQuery>,
    selected: usize,
    comments: Vec<String>,
}

impl App {
    pub fn new(part_types: Vec<PartType>, candidates: Vec<Suggestion>, debounce: Duration) -> Self {
        Self {
            session: MentionSession::new(part_types),
            candidates,
            debouncer: Debouncer::new(debounce),
            query: None,
            selected: 0,
            comments: Vec::new(),
        }
    }

    pub fn session(&self) -> &MentionSession {
        &self.session
    }

    /// Sent comments as raw markup, oldest first.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    pub fn query(&self) -> Option<&ActiveQuery> {
        self.query.as_ref()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Candidates for the open query, empty when the list is closed.
    pub fn matches(&self) -> Vec<&Suggestion> {
        match &self.query {
            Some(query) => filter_suggestions(&self.candidates, &query.keyword),
            None => Vec::new(),
        }
    }

    pub fn insert_char(&mut self, c: char, now: Instant) {
        let plain = self.session.plain_text();
        let selection = self.session.selection();
        let mut changed = String::with_capacity(plain.len() + c.len_utf8());
        changed.push_str(&plain[..byte_offset(&plain, selection.start)]);
        changed.push(c);
        changed.push_str(&plain[byte_offset(&plain, selection.end)..]);
        self.apply(&changed, selection.start + 1, now);
    }

    pub fn backspace(&mut self, now: Instant) {
        let selection = self.session.selection();
        if selection.is_collapsed() {
            if selection.start == 0 {
                return;
            }
            self.remove(Position::new(selection.start - 1, selection.start), now);
        } else {
            self.remove(selection, now);
        }
    }

    pub fn delete(&mut self, now: Instant) {
        let selection = self.session.selection();
        let plain_len = char_len(&self.session.plain_text());
        if selection.is_collapsed() {
            if selection.end >= plain_len {
                return;
            }
            self.remove(Position::new(selection.end, selection.end + 1), now);
        } else {
            self.remove(selection, now);
        }
    }

    pub fn move_left(&mut self, now: Instant) {
        let caret = self.session.selection().start.saturating_sub(1);
        self.move_caret(caret, now);
    }

    pub fn move_right(&mut self, now: Instant) {
        let caret = self.session.selection().end + 1;
        self.move_caret(caret, now);
    }

    pub fn move_home(&mut self, now: Instant) {
        self.move_caret(0, now);
    }

    pub fn move_end(&mut self, now: Instant) {
        self.move_caret(usize::MAX, now);
    }

    pub fn select_next(&mut self) {
        let count = self.matches().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.matches().len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    /// Commits the highlighted candidate. Returns `false` when nothing was open.
    pub fn commit_selected(&mut self) -> bool {
        let Some(query) = self.query.clone() else {
            return false;
        };
        let Some(suggestion) = self.matches().get(self.selected).map(|s| (*s).clone()) else {
            return false;
        };

        let committed = self.session.add_suggestion(query.trigger, &suggestion);
        if committed {
            self.close_query();
        }
        committed
    }

    /// Moves the composed comment to the sent list, ignoring blank input.
    pub fn send(&mut self) {
        if self.session.plain_text().trim().is_empty() {
            return;
        }
        let value = self.session.clear();
        log::info!("sent comment: {value:?}");
        self.comments.push(value);
        self.close_query();
    }

    /// Releases the debounced keyword lookup once it is due.
    pub fn tick(&mut self, now: Instant) {
        let Some(keywords) = self.debouncer.poll(now) else {
            return;
        };
        let query = keywords
            .into_iter()
            .find_map(|(trigger, keyword)| keyword.map(|keyword| ActiveQuery { trigger, keyword }));
        if query != self.query {
            self.selected = 0;
        }
        self.query = query;
    }

    fn remove(&mut self, range: Position, now: Instant) {
        let plain = self.session.plain_text();
        let mut changed = String::with_capacity(plain.len());
        changed.push_str(&plain[..byte_offset(&plain, range.start)]);
        changed.push_str(&plain[byte_offset(&plain, range.end)..]);
        self.apply(&changed, range.start, now);
    }

    fn apply(&mut self, changed: &str, caret: usize, now: Instant) {
        self.session.change_text(changed);
        self.session.set_selection(Position::caret(caret));
        self.schedule(now);
    }

    fn move_caret(&mut self, caret: usize, now: Instant) {
        let caret = caret.min(char_len(&self.session.plain_text()));
        self.session.set_selection(Position::caret(caret));
        self.schedule(now);
    }

    fn schedule(&mut self, now: Instant) {
        self.debouncer.push(self.session.keywords(), now);
    }

    fn close_query(&mut self) {
        self.debouncer.cancel();
        self.query = None;
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mentionkit_engine::MentionPartType;
    use pretty_assertions::assert_eq;

    const DEBOUNCE: Duration = Duration::from_millis(100);

    fn app() -> App {
        App::new(
            vec![PartType::Mention(
                MentionPartType::new('@').insert_space_after_mention(true),
            )],
            vec![
                Suggestion::new("1", "John Doe"),
                Suggestion::new("2", "Alice Smith"),
                Suggestion::new("3", "Michael Johnson"),
            ],
            DEBOUNCE,
        )
    }

    fn type_str(app: &mut App, s: &str, now: Instant) {
        for c in s.chars() {
            app.insert_char(c, now);
        }
    }

    #[test]
    fn query_opens_after_debounce() {
        let t0 = Instant::now();
        let mut app = app();
        type_str(&mut app, "hi @jo", t0);

        app.tick(t0 + DEBOUNCE / 2);
        assert_eq!(app.query(), None);

        app.tick(t0 + DEBOUNCE);
        assert_eq!(
            app.query(),
            Some(&ActiveQuery {
                trigger: '@',
                keyword: "jo".to_string()
            })
        );
        let names: Vec<_> = app.matches().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["John Doe", "Michael Johnson"]);
    }

    #[test]
    fn commit_replaces_query_with_mention() {
        let t0 = Instant::now();
        let mut app = app();
        type_str(&mut app, "hi @jo", t0);
        app.tick(t0 + DEBOUNCE);

        app.select_next();
        assert_eq!(app.selected(), 1);
        assert!(app.commit_selected());

        assert_eq!(app.session().value(), "hi @[Michael Johnson](3) ");
        assert_eq!(app.session().selection(), Position::caret(20));
        assert_eq!(app.query(), None);
        assert_eq!(app.next_deadline(), None);
    }

    #[test]
    fn selection_wraps_around() {
        let t0 = Instant::now();
        let mut app = app();
        type_str(&mut app, "@", t0);
        app.tick(t0 + DEBOUNCE);

        app.select_previous();
        assert_eq!(app.selected(), 2);
        app.select_next();
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn commit_without_query_does_nothing() {
        let mut app = app();
        type_str(&mut app, "hello", Instant::now());
        assert!(!app.commit_selected());
        assert_eq!(app.session().value(), "hello");
    }

    #[test]
    fn backspace_into_mention_unlinks_it() {
        let t0 = Instant::now();
        let mut app = app();
        type_str(&mut app, "@jo", t0);
        app.tick(t0 + DEBOUNCE);
        assert!(app.commit_selected());
        assert_eq!(app.session().value(), "@[John Doe](1) ");

        app.backspace(t0);
        assert_eq!(app.session().value(), "@[John Doe](1)");
        app.backspace(t0);
        assert_eq!(app.session().value(), "@John Do");
    }

    #[test]
    fn caret_moves_and_edits_in_place() {
        let t0 = Instant::now();
        let mut app = app();
        type_str(&mut app, "ac", t0);
        app.move_left(t0);
        app.insert_char('b', t0);
        assert_eq!(app.session().value(), "abc");

        app.move_home(t0);
        app.delete(t0);
        assert_eq!(app.session().value(), "bc");

        app.move_end(t0);
        assert_eq!(app.session().selection(), Position::caret(2));
        app.move_right(t0);
        assert_eq!(app.session().selection(), Position::caret(2));
        app.delete(t0);
        assert_eq!(app.session().value(), "bc");
    }

    #[test]
    fn send_moves_markup_to_comments() {
        let t0 = Instant::now();
        let mut app = app();
        type_str(&mut app, "   ", t0);
        app.send();
        assert!(app.comments().is_empty());

        type_str(&mut app, "@jo", t0);
        app.tick(t0 + DEBOUNCE);
        assert!(app.commit_selected());
        app.send();

        assert_eq!(app.comments(), &["   @[John Doe](1) ".to_string()]);
        assert_eq!(app.session().value(), "");
        assert_eq!(app.query(), None);
    }

    #[test]
    fn moving_back_into_trigger_reopens_query() {
        let t0 = Instant::now();
        let mut app = app();
        // Two spaces after the trigger exceed the allowance.
        type_str(&mut app, "@jo a b", t0);
        app.tick(t0 + DEBOUNCE);
        assert_eq!(app.query(), None);

        for _ in 0..4 {
            app.move_left(t0);
        }
        app.tick(t0 + DEBOUNCE);
        assert_eq!(app.query().map(|q| q.keyword.as_str()), Some("jo"));
    }
}
