use std::{collections::BTreeMap, fmt::Write};

use serde_json::Number;

pub const ADDR: &str = "addr";
pub const MONEY: &str = "money";
pub const SEND: &str = "send";
pub const AMOUNT: &str = "amount";
pub const RECIPIENT: &str = "recipient";
pub const ALERT: &str = "alert";

const ELEMENT_IDS: [&str; 6] = [ADDR, MONEY, SEND, AMOUNT, RECIPIENT, ALERT];

/// The page elements the wallet controller reads and writes.
pub trait WalletView {
    /// `#addr` text.
    fn show_address(&mut self, address: &str);

    /// `#money` text and `max` attribute.
    fn show_balance(&mut self, balance: &Number);

    /// Upper bound hint on the `#amount` input.
    fn limit_amount(&mut self, max: &Number);

    /// Current `#amount` value, as typed.
    fn amount_input(&self) -> String;

    /// Current `#recipient` value, as typed.
    fn recipient_input(&self) -> String;

    /// `#alert` text.
    fn show_alert(&mut self, notice: &str);
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Element {
    pub text: String,
    pub value: String,
    pub max: Option<Number>,
}

/// In-memory wallet page holding one [`Element`] per id.
#[derive(Debug, Clone)]
pub struct PageView {
    elements: BTreeMap<&'static str, Element>,
}

impl Default for PageView {
    fn default() -> Self {
        PageView::new()
    }
}

impl PageView {
    pub fn new() -> PageView {
        let elements = ELEMENT_IDS
            .iter()
            .map(|id| (*id, Element::default()))
            .collect();

        PageView { elements }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> &str {
        self.element(id).map(|e| e.text.as_str()).unwrap_or_default()
    }

    pub fn max(&self, id: &str) -> Option<&Number> {
        self.element(id).and_then(|e| e.max.as_ref())
    }

    /// Types `value` into an input element.
    pub fn fill(&mut self, id: &str, value: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.value = value.to_string();
        }
    }

    fn value(&self, id: &str) -> String {
        self.element(id).map(|e| e.value.clone()).unwrap_or_default()
    }

    fn element_mut(&mut self, id: &'static str) -> &mut Element {
        self.elements.entry(id).or_default()
    }

    /// One `#id: text` line per display element.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for id in [ADDR, MONEY, ALERT] {
            let _ = writeln!(out, "#{}: {}", id, self.text(id));
        }

        out
    }
}

impl WalletView for PageView {
    fn show_address(&mut self, address: &str) {
        self.element_mut(ADDR).text = address.to_string();
    }

    fn show_balance(&mut self, balance: &Number) {
        let money = self.element_mut(MONEY);
        money.text = balance.to_string();
        money.max = Some(balance.clone());
    }

    fn limit_amount(&mut self, max: &Number) {
        self.element_mut(AMOUNT).max = Some(max.clone());
    }

    fn amount_input(&self) -> String {
        self.value(AMOUNT)
    }

    fn recipient_input(&self) -> String {
        self.value(RECIPIENT)
    }

    fn show_alert(&mut self, notice: &str) {
        self.element_mut(ALERT).text = notice.to_string();
    }
}
