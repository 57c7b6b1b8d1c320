use std::time::{
    Duration,
    Instant,
};

use crate::core::{
    tasks::types::{
        OutboundGenerate,
        RequestId,
        RequestLifecycle,
    },
    Deck,
    FlashCard,
    StudyContext,
};

/// Duration of the card fade and flip animations. State commits only once
/// the window has fully elapsed.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

pub const COMPLETION_NOTICE: &str = "All flashcards completed! Recycling questions...";

fn generation_failed_notice(subject: &str) -> String {
    format!("Could not generate {} flashcards. Please try again.", subject)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    Empty,
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Advancing,
    Flipping,
}

/// The transition lock. While one of these is alive, advance and flip
/// triggers are dropped; `tick` is the only writer that clears it.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub kind: TransitionKind,
    started: Instant,
}

impl Transition {
    fn new(kind: TransitionKind, now: Instant) -> Self {
        Self { kind, started: now }
    }

    fn is_elapsed(&self, now: Instant) -> bool {
        now.duration_since(self.started) >= TRANSITION_DURATION
    }

    /// 0.0 at the start of the window, 1.0 at commit time. Used by the
    /// practice view to draw the fade/flip.
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.duration_since(self.started).as_secs_f32();
        (elapsed / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn remaining(&self, now: Instant) -> Duration {
        TRANSITION_DURATION.saturating_sub(now.duration_since(self.started))
    }
}

/// Drives flashcard browsing: deck position, answer visibility and the
/// timed transitions between them, plus the single in-flight generation
/// call.
pub struct ReviewController {
    lifecycle: RequestLifecycle,
    deck: Option<Deck>,
    current_index: usize,
    answer_visible: bool,
    transition: Option<Transition>,
    notice: Option<String>,
}

impl ReviewController {
    pub fn new() -> Self {
        Self {
            lifecycle: RequestLifecycle::new(),
            deck: None,
            current_index: 0,
            answer_visible: false,
            transition: None,
            notice: None,
        }
    }

    pub fn phase(&self) -> DeckPhase {
        if self.lifecycle.is_pending() {
            DeckPhase::Loading
        } else if self.deck.is_some() {
            DeckPhase::Ready
        } else {
            DeckPhase::Empty
        }
    }

    pub fn deck_len(&self) -> usize {
        self.deck.as_ref().map_or(0, Deck::len)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answer_visible(&self) -> bool {
        self.answer_visible
    }

    pub fn current_card(&self) -> Option<&FlashCard> {
        self.deck.as_ref().and_then(|deck| deck.card(self.current_index))
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Requests a fresh deck. The current deck disappears immediately so
    /// no stale card lingers while the call is on the wire; a generation
    /// already in flight is superseded and its response will be dropped.
    pub fn regenerate(&mut self, context: StudyContext) -> Option<OutboundGenerate> {
        if let Some(pending) = self.lifecycle.pending() {
            let id = pending.handle.id();
            self.lifecycle.cancel(id);
        }

        self.deck = None;
        self.current_index = 0;
        self.answer_visible = false;
        self.transition = None;
        self.notice = None;

        // The subject doubles as the query; it is never blank here, and a
        // pending call was cancelled above, so submit cannot fail.
        let subject = context.subject.clone();
        let pending = self.lifecycle.submit(&subject, context).ok()?;
        Some(OutboundGenerate::from_pending(pending))
    }

    /// Installs the generated deck, or records the failure. Responses for
    /// superseded generations are discarded.
    pub fn handle_deck(&mut self, id: RequestId, result: Result<Vec<FlashCard>, String>) {
        let pending = match self.lifecycle.settle(id) {
            Some(pending) => pending,
            None => {
                println!("[review] discarding stale deck for generation #{}", id);
                return;
            }
        };

        match result {
            Ok(cards) if !cards.is_empty() => {
                self.deck = Some(Deck::new(cards));
                self.current_index = 0;
                self.answer_visible = false;
            }
            Ok(_) => {
                eprintln!("[review] backend returned an empty deck");
                self.notice = Some(generation_failed_notice(&pending.context.subject));
            }
            Err(reason) => {
                eprintln!("[review] generation #{} failed: {}", id, reason);
                self.notice = Some(generation_failed_notice(&pending.context.subject));
            }
        }
    }

    /// Starts the fade toward the next card. Dropped while the lock is
    /// held or when no deck is loaded.
    pub fn advance(&mut self, now: Instant) {
        if self.phase() != DeckPhase::Ready || self.transition.is_some() {
            return;
        }

        self.notice = None;
        self.transition = Some(Transition::new(TransitionKind::Advancing, now));
    }

    /// Starts the flip that reveals or hides the answer. Dropped while
    /// the lock is held or when no deck is loaded.
    pub fn toggle_answer(&mut self, now: Instant) {
        if self.phase() != DeckPhase::Ready || self.transition.is_some() {
            return;
        }

        self.notice = None;
        self.transition = Some(Transition::new(TransitionKind::Flipping, now));
    }

    /// Commits the pending transition once its window has elapsed.
    /// Returns true when state changed so the caller can repaint.
    pub fn tick(&mut self, now: Instant) -> bool {
        let transition = match self.transition {
            Some(transition) if transition.is_elapsed(now) => transition,
            _ => return false,
        };
        self.transition = None;

        match transition.kind {
            TransitionKind::Advancing => {
                let len = self.deck_len();
                if len == 0 {
                    return true;
                }
                if self.current_index + 1 < len {
                    self.current_index += 1;
                } else {
                    self.current_index = 0;
                    self.notice = Some(COMPLETION_NOTICE.to_string());
                }
                self.answer_visible = false;
            }
            TransitionKind::Flipping => {
                self.answer_visible = !self.answer_visible;
            }
        }

        true
    }

    /// Time left until the pending transition commits, for repaint
    /// scheduling.
    pub fn time_until_commit(&self, now: Instant) -> Option<Duration> {
        self.transition.as_ref().map(|t| t.remaining(now))
    }
}

impl Default for ReviewController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GradeLevel;

    fn mathematics() -> StudyContext {
        StudyContext::new(GradeLevel::Primary, "mathematics")
    }

    fn cards(n: usize) -> Vec<FlashCard> {
        (0..n)
            .map(|i| FlashCard { question: format!("q{}", i), answer: format!("a{}", i) })
            .collect()
    }

    fn loaded(n: usize) -> ReviewController {
        let mut review = ReviewController::new();
        let outbound = review.regenerate(mathematics()).unwrap();
        review.handle_deck(outbound.id, Ok(cards(n)));
        review
    }

    /// Runs one full advance window: trigger plus elapsed commit.
    fn advance_through(review: &mut ReviewController, now: Instant) -> Instant {
        review.advance(now);
        let later = now + TRANSITION_DURATION;
        assert!(review.tick(later));
        later
    }

    #[test]
    fn regenerate_clears_the_visible_card_immediately() {
        let mut review = loaded(3);
        assert_eq!(review.phase(), DeckPhase::Ready);

        review.regenerate(mathematics()).unwrap();
        assert_eq!(review.phase(), DeckPhase::Loading);
        assert!(review.current_card().is_none());
    }

    #[test]
    fn generated_deck_starts_at_the_first_card_with_answer_hidden() {
        let mut review = ReviewController::new();
        let outbound = review.regenerate(mathematics()).unwrap();

        review.handle_deck(
            outbound.id,
            Ok(vec![FlashCard { question: "2+2?".to_string(), answer: "4".to_string() }]),
        );

        assert_eq!(review.phase(), DeckPhase::Ready);
        assert_eq!(review.deck_len(), 1);
        assert_eq!(review.current_index(), 0);
        assert!(!review.answer_visible());
        assert_eq!(review.current_card().unwrap().question, "2+2?");
    }

    #[test]
    fn failed_generation_returns_to_empty_with_no_partial_deck() {
        let mut review = ReviewController::new();
        let outbound = review.regenerate(mathematics()).unwrap();

        review.handle_deck(outbound.id, Err("HTTP 500".to_string()));

        assert_eq!(review.phase(), DeckPhase::Empty);
        assert!(review.current_card().is_none());
        assert!(review.notice().is_some());
    }

    #[test]
    fn superseded_generation_response_is_discarded() {
        let mut review = ReviewController::new();
        let first = review.regenerate(mathematics()).unwrap();
        let second = review.regenerate(mathematics()).unwrap();

        review.handle_deck(first.id, Ok(cards(2)));
        assert_eq!(review.phase(), DeckPhase::Loading);

        review.handle_deck(second.id, Ok(cards(4)));
        assert_eq!(review.phase(), DeckPhase::Ready);
        assert_eq!(review.deck_len(), 4);
    }

    #[test]
    fn advancing_n_times_wraps_back_to_the_start() {
        let mut review = loaded(3);
        let mut now = Instant::now();

        for _ in 0..3 {
            now = advance_through(&mut review, now);
        }

        assert_eq!(review.current_index(), 0);
    }

    #[test]
    fn wrap_past_the_last_card_raises_the_completion_notice() {
        let mut review = loaded(1);
        let now = Instant::now();

        advance_through(&mut review, now);

        assert_eq!(review.current_index(), 0);
        assert_eq!(review.notice(), Some(COMPLETION_NOTICE));
    }

    #[test]
    fn advance_resets_answer_visibility() {
        let mut review = loaded(2);
        let mut now = Instant::now();

        review.toggle_answer(now);
        now += TRANSITION_DURATION;
        review.tick(now);
        assert!(review.answer_visible());

        advance_through(&mut review, now);
        assert!(!review.answer_visible());
    }

    #[test]
    fn toggling_twice_round_trips_answer_visibility() {
        let mut review = loaded(2);
        let mut now = Instant::now();

        review.toggle_answer(now);
        now += TRANSITION_DURATION;
        review.tick(now);
        review.toggle_answer(now);
        now += TRANSITION_DURATION;
        review.tick(now);

        assert!(!review.answer_visible());
    }

    #[test]
    fn triggers_during_the_lock_window_are_dropped() {
        let mut review = loaded(3);
        let now = Instant::now();

        review.advance(now);
        // Both arrive before the 300ms window has elapsed.
        review.advance(now + Duration::from_millis(100));
        review.toggle_answer(now + Duration::from_millis(200));

        assert!(review.tick(now + TRANSITION_DURATION));
        assert_eq!(review.current_index(), 1);
        assert!(!review.answer_visible());

        // Nothing queued: the window is clear again.
        assert!(!review.tick(now + 2 * TRANSITION_DURATION));
        assert_eq!(review.current_index(), 1);
    }

    #[test]
    fn tick_before_the_window_elapses_commits_nothing() {
        let mut review = loaded(2);
        let now = Instant::now();

        review.advance(now);
        assert!(!review.tick(now + Duration::from_millis(100)));
        assert_eq!(review.current_index(), 0);
        assert!(review.transition().is_some());
    }

    #[test]
    fn regenerate_during_a_transition_clears_the_lock() {
        let mut review = loaded(2);
        let now = Instant::now();

        review.advance(now);
        review.regenerate(mathematics()).unwrap();

        assert!(review.transition().is_none());
        assert!(!review.tick(now + TRANSITION_DURATION));
        assert_eq!(review.current_index(), 0);
    }
}
