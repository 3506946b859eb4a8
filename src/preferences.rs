use serde::{Deserialize, Serialize};

pub const CONSENT_KEY: &str = "cookie-consent";
pub const THEME_KEY: &str = "theme";
pub const CONSENT_REVEAL_DELAY_MS: u32 = 1_500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const DEFAULT: Self = Self::Dark;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
        }
    }

    /// Stored choice first, then the system scheme, then the brand default.
    pub fn resolve(stored: Option<Self>, system_prefers_dark: Option<bool>) -> Self {
        stored.unwrap_or(match system_prefers_dark {
            Some(true) => Self::Dark,
            Some(false) => Self::Light,
            None => Self::DEFAULT,
        })
    }
}

/// Cookie consent record. `necessary` is always on and cannot be cleared,
/// including when an edited record is read back from storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredConsent")]
pub struct ConsentPreference {
    necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
}

#[derive(Deserialize)]
struct StoredConsent {
    #[serde(default)]
    analytics: bool,
    #[serde(default)]
    marketing: bool,
}

impl From<StoredConsent> for ConsentPreference {
    fn from(stored: StoredConsent) -> Self {
        Self::new(stored.analytics, stored.marketing)
    }
}

impl Default for ConsentPreference {
    fn default() -> Self {
        Self::necessary_only()
    }
}

impl ConsentPreference {
    pub fn new(analytics: bool, marketing: bool) -> Self {
        Self {
            necessary: true,
            analytics,
            marketing,
        }
    }

    pub fn all() -> Self {
        Self::new(true, true)
    }

    pub fn necessary_only() -> Self {
        Self::new(false, false)
    }

    pub fn necessary(&self) -> bool {
        self.necessary
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("storage rejected the write: {0}")]
    Rejected(String),
    #[error("could not encode preference record: {0}")]
    Encode(String),
}

pub trait KeyValueStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// `None` means undecided: nothing stored, storage unreadable, or a
    /// record that no longer parses.
    pub fn consent(&self) -> Option<ConsentPreference> {
        let raw = self.storage.get(CONSENT_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_consent(&self, record: &ConsentPreference) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(record).map_err(|err| StorageError::Encode(err.to_string()))?;
        self.storage.set(CONSENT_KEY, &encoded)
    }

    pub fn theme(&self) -> Option<Theme> {
        let raw = self.storage.get(THEME_KEY).ok().flatten()?;
        Theme::parse(&raw)
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.storage.set(THEME_KEY, theme.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptPhase {
    Settled,
    Pending,
    Scheduled,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentChoice {
    AcceptAll,
    NecessaryOnly,
    SaveCustom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsentPrompt {
    phase: PromptPhase,
    showing_preferences: bool,
    draft: ConsentPreference,
}

impl ConsentPrompt {
    pub fn new(stored: Option<ConsentPreference>) -> Self {
        Self {
            phase: if stored.is_some() {
                PromptPhase::Settled
            } else {
                PromptPhase::Pending
            },
            showing_preferences: false,
            draft: ConsentPreference::default(),
        }
    }

    pub fn phase(&self) -> PromptPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == PromptPhase::Visible
    }

    pub fn showing_preferences(&self) -> bool {
        self.showing_preferences
    }

    pub fn draft(&self) -> ConsentPreference {
        self.draft
    }

    /// Returns true exactly once, when the caller should start the timer.
    pub fn schedule(&mut self) -> bool {
        if self.phase != PromptPhase::Pending {
            return false;
        }
        self.phase = PromptPhase::Scheduled;
        true
    }

    /// Timer fired. Repeated or late firings are no-ops.
    pub fn reveal(&mut self) -> bool {
        if self.phase != PromptPhase::Scheduled {
            return false;
        }
        self.phase = PromptPhase::Visible;
        true
    }

    pub fn open_preferences(&mut self) {
        self.showing_preferences = true;
    }

    pub fn close_preferences(&mut self) {
        self.showing_preferences = false;
    }

    pub fn set_analytics(&mut self, enabled: bool) {
        self.draft.analytics = enabled;
    }

    pub fn set_marketing(&mut self, enabled: bool) {
        self.draft.marketing = enabled;
    }

    pub fn resolve(&mut self, choice: ConsentChoice) -> Option<ConsentPreference> {
        if self.phase != PromptPhase::Visible {
            return None;
        }

        let record = match choice {
            ConsentChoice::AcceptAll => ConsentPreference::all(),
            ConsentChoice::NecessaryOnly => ConsentPreference::necessary_only(),
            ConsentChoice::SaveCustom => self.draft,
        };
        self.phase = PromptPhase::Settled;
        self.showing_preferences = false;
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        entries: RefCell<HashMap<String, String>>,
        read_only: bool,
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.entries.borrow().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.read_only {
                return Err(StorageError::Rejected("quota exceeded".to_string()));
            }
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn empty_store_is_undecided() {
        let store = PreferenceStore::new(MemoryStorage::default());
        assert_eq!(store.consent(), None);
        assert_eq!(store.theme(), None);
    }

    #[test]
    fn accept_all_persists_the_complete_record() {
        let storage = MemoryStorage::default();
        let store = PreferenceStore::new(storage);
        let mut prompt = ConsentPrompt::new(store.consent());
        assert!(prompt.schedule());
        assert!(prompt.reveal());

        let record = prompt.resolve(ConsentChoice::AcceptAll).expect("prompt was visible");
        store.set_consent(&record).expect("writable storage");

        assert!(!prompt.is_visible());
        assert_eq!(
            store.storage.entries.borrow().get(CONSENT_KEY).map(String::as_str),
            Some(r#"{"necessary":true,"analytics":true,"marketing":true}"#)
        );
        assert_eq!(store.consent(), Some(ConsentPreference::all()));
    }

    #[test]
    fn prompt_is_hidden_until_the_timer_fires() {
        let mut prompt = ConsentPrompt::new(None);
        assert_eq!(prompt.phase(), PromptPhase::Pending);
        assert!(!prompt.reveal(), "cannot reveal before scheduling");

        assert!(prompt.schedule());
        assert!(!prompt.schedule(), "second schedule must not restart the timer");
        assert!(!prompt.is_visible());

        assert!(prompt.reveal());
        assert!(!prompt.reveal());
        assert!(prompt.is_visible());
    }

    #[test]
    fn decided_visitor_never_sees_the_prompt() {
        let mut prompt = ConsentPrompt::new(Some(ConsentPreference::necessary_only()));
        assert!(!prompt.schedule());
        assert!(!prompt.reveal());
        assert_eq!(prompt.resolve(ConsentChoice::AcceptAll), None);
    }

    #[test]
    fn custom_selection_writes_the_draft() {
        let mut prompt = ConsentPrompt::new(None);
        prompt.schedule();
        prompt.reveal();
        prompt.open_preferences();
        prompt.set_marketing(true);

        let record = prompt.resolve(ConsentChoice::SaveCustom).expect("visible");
        assert_eq!(record, ConsentPreference::new(false, true));
        assert!(record.necessary());
        assert!(!prompt.showing_preferences());
    }

    #[test]
    fn tampered_record_cannot_clear_necessary() {
        let storage = MemoryStorage::default();
        storage.entries.borrow_mut().insert(
            CONSENT_KEY.to_string(),
            r#"{"necessary":false,"analytics":true}"#.to_string(),
        );
        let store = PreferenceStore::new(storage);

        let record = store.consent().expect("parsable record");
        assert!(record.necessary());
        assert!(record.analytics);
        assert!(!record.marketing);
    }

    #[test]
    fn unparsable_record_counts_as_undecided() {
        let storage = MemoryStorage::default();
        storage
            .entries
            .borrow_mut()
            .insert(CONSENT_KEY.to_string(), "yes please".to_string());
        assert_eq!(PreferenceStore::new(storage).consent(), None);
    }

    #[test]
    fn failed_write_surfaces_as_an_error_for_the_caller_to_drop() {
        let store = PreferenceStore::new(MemoryStorage {
            read_only: true,
            ..MemoryStorage::default()
        });
        let mut prompt = ConsentPrompt::new(store.consent());
        prompt.schedule();
        prompt.reveal();

        let record = prompt.resolve(ConsentChoice::NecessaryOnly).expect("visible");
        assert!(store.set_consent(&record).is_err());
        assert_eq!(prompt.phase(), PromptPhase::Settled);
    }

    #[test]
    fn theme_round_trips_and_resolves_with_fallbacks() {
        let store = PreferenceStore::new(MemoryStorage::default());
        store.set_theme(Theme::Light).expect("writable storage");
        assert_eq!(store.theme(), Some(Theme::Light));

        assert_eq!(Theme::resolve(Some(Theme::Light), Some(true)), Theme::Light);
        assert_eq!(Theme::resolve(None, Some(false)), Theme::Light);
        assert_eq!(Theme::resolve(None, None), Theme::Dark);
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light theme");
    }
}
