use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A persisted conversation. Field names match the `chatSessions` entry
/// written by earlier versions of the page, so existing histories still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ChatSession {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            messages: Vec::new(),
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn of the conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<CarListing>>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { sender: Sender::User, text: text.into(), results: None }
    }

    pub fn bot(text: impl Into<String>, results: Vec<CarListing>) -> Self {
        Self { sender: Sender::Bot, text: text.into(), results: Some(results) }
    }

    /// A bot message without a result list (used for the fallback reply).
    pub fn bot_text(text: impl Into<String>) -> Self {
        Self { sender: Sender::Bot, text: text.into(), results: None }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }

    /// Results worth rendering as a card stack: bot-only and non-empty.
    pub fn listings(&self) -> &[CarListing] {
        match (&self.sender, &self.results) {
            (Sender::Bot, Some(results)) => results,
            _ => &[],
        }
    }
}

/// A car record as returned by the assistant. The record is kept verbatim;
/// accessors look up the Turkish field name first and fall back to the
/// English aliases some backend versions emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CarListing(pub Map<String, Value>);

impl CarListing {
    /// First usable value among `names`. While another alias remains,
    /// `""`, `false` and numeric zero are skipped like missing fields; the
    /// last name only has to be non-null, so `km: 0` still reads as `0`.
    pub fn lookup(&self, names: &[&str]) -> Option<&Value> {
        let last = names.len().checked_sub(1)?;
        names.iter().enumerate().find_map(|(i, name)| {
            let value = self.0.get(*name)?;
            let usable = if i == last { !value.is_null() } else { is_present(value) };
            usable.then_some(value)
        })
    }

    fn text(&self, names: &[&str]) -> Option<String> {
        self.lookup(names).map(display_value)
    }

    pub fn make(&self) -> Option<String> {
        self.text(&["marka"])
    }

    pub fn series(&self) -> Option<String> {
        self.text(&["seri"])
    }

    pub fn model(&self) -> Option<String> {
        self.text(&["model"])
    }

    pub fn price(&self) -> Option<&Value> {
        self.lookup(&["fiyat"])
    }

    pub fn year(&self) -> Option<String> {
        self.text(&["yil"])
    }

    pub fn mileage(&self) -> Option<String> {
        self.text(&["km"])
    }

    pub fn fuel(&self) -> Option<String> {
        self.text(&["yakit", "fuel"])
    }

    pub fn transmission(&self) -> Option<String> {
        self.text(&["vites", "transmission"])
    }

    pub fn body_type(&self) -> Option<String> {
        self.text(&["kasa_tipi", "body_type", "type"])
    }

    pub fn color(&self) -> Option<String> {
        self.text(&["renk", "color"])
    }

    /// Only a non-empty link gets a button.
    pub fn link(&self) -> Option<String> {
        self.lookup(&["link"]).filter(|v| is_present(v)).map(display_value)
    }

    /// "Marka Seri" heading, skipping whichever half is absent.
    pub fn headline(&self) -> String {
        [self.make(), self.series()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(value: Value) -> CarListing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn falls_back_to_alternate_field_names() {
        let car = listing(json!({
            "marka": "Renault",
            "fuel": "Dizel",
            "transmission": "Manuel",
            "type": "Sedan",
            "color": "Beyaz"
        }));
        assert_eq!(car.fuel().as_deref(), Some("Dizel"));
        assert_eq!(car.transmission().as_deref(), Some("Manuel"));
        assert_eq!(car.body_type().as_deref(), Some("Sedan"));
        assert_eq!(car.color().as_deref(), Some("Beyaz"));
    }

    #[test]
    fn empty_primary_field_uses_next_alias() {
        let car = listing(json!({ "yakit": "", "fuel": "Benzin", "kasa_tipi": null, "body_type": "Hatchback" }));
        assert_eq!(car.fuel().as_deref(), Some("Benzin"));
        assert_eq!(car.body_type().as_deref(), Some("Hatchback"));
    }

    #[test]
    fn zero_is_shown_for_single_name_fields() {
        let car = listing(json!({ "km": 0, "fiyat": 0, "yil": 2024, "seri": null }));
        assert_eq!(car.mileage().as_deref(), Some("0"));
        assert_eq!(car.price(), Some(&json!(0)));
        assert_eq!(car.year().as_deref(), Some("2024"));
        assert_eq!(car.series(), None);
        assert_eq!(crate::format::price(car.price()), "0");
        assert_eq!(listing(json!({ "link": "" })).link(), None);
    }

    #[test]
    fn last_alias_is_rendered_even_when_falsy() {
        let car = listing(json!({ "renk": "", "color": "" }));
        assert_eq!(car.color().as_deref(), Some(""));
        let car = listing(json!({ "vites": null }));
        assert_eq!(car.transmission(), None);
    }

    #[test]
    fn missing_fields_are_absent() {
        let car = listing(json!({ "model": "1.5 dCi" }));
        assert_eq!(car.make(), None);
        assert_eq!(car.link(), None);
        assert_eq!(car.headline(), "");
        assert_eq!(car.model().as_deref(), Some("1.5 dCi"));
    }

    #[test]
    fn numbers_render_as_text() {
        let car = listing(json!({ "yil": 2019, "km": 85000, "marka": "Fiat", "seri": "Egea" }));
        assert_eq!(car.year().as_deref(), Some("2019"));
        assert_eq!(car.mileage().as_deref(), Some("85000"));
        assert_eq!(car.headline(), "Fiat Egea");
    }

    #[test]
    fn listing_round_trips_verbatim() {
        let raw = json!({ "marka": "Opel", "ekstra": { "hasar": false }, "fiyat": 950000 });
        let car = listing(raw.clone());
        assert_eq!(serde_json::to_value(&car).unwrap(), raw);
    }

    #[test]
    fn session_uses_camel_case_fields() {
        let mut session = ChatSession::new("session_1_abc".into(), "Yeni Sohbet".into());
        session.messages.push(Message::user("merhaba"));
        let value = serde_json::to_value(&session).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_none());
        assert_eq!(value["messages"][0]["sender"], "user");
        assert!(value["messages"][0].get("results").is_none());
    }

    #[test]
    fn reads_sessions_written_by_the_browser() {
        let raw = r#"[{"id":"session_1700000000000_k3j2h1g0f","title":"Yeni Sohbet","messages":[],"createdAt":"2024-05-01T10:00:00.000Z"}]"#;
        let sessions: Vec<ChatSession> = serde_json::from_str(raw).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].updated_at, None);
    }

    #[test]
    fn only_bot_messages_expose_listings() {
        let car = listing(json!({ "marka": "BMW" }));
        let bot = Message::bot("Buldum", vec![car.clone()]);
        assert_eq!(bot.listings().len(), 1);
        let mut user = Message::user("bmw");
        user.results = Some(vec![car]);
        assert!(user.listings().is_empty());
        assert!(Message::bot_text("hata").listings().is_empty());
    }
}
