use crate::view::form::Field;

/// What a user interaction asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectParty(i64),
    DeleteParty(i64),
    SubmitForm,
}

/// A plain, front-end independent UI tree.
///
/// View functions build it from state; the GUI and the text renderer lower it.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Heading { level: u8, text: String },
    Paragraph(String),
    /// `datetime` is the machine-readable value, `label` what is shown.
    Time { datetime: String, label: String },
    Address(String),
    List(Vec<View>),
    Item(Item),
    Button { label: String, action: Action },
    Form(FormView),
    Section {
        anchor: Option<&'static str>,
        children: Vec<View>,
    },
    Columns(Vec<View>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub label: String,
    pub selected: bool,
    pub action: Option<Action>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub kind: InputKind,
    pub value: String,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub submit_label: String,
    pub action: Action,
}

impl View {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        View::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn section(children: Vec<View>) -> Self {
        View::Section {
            anchor: None,
            children,
        }
    }

    /// Depth-first search for the section carrying `anchor`.
    pub fn find_anchor(&self, anchor: &str) -> Option<&View> {
        match self {
            View::Section {
                anchor: Some(own), ..
            } if *own == anchor => Some(self),
            View::Section { children, .. } | View::List(children) | View::Columns(children) => {
                children.iter().find_map(|child| child.find_anchor(anchor))
            }
            _ => None,
        }
    }

    /// Every [`Item`] in the tree, in document order.
    pub fn items(&self) -> Vec<&Item> {
        let mut out = Vec::new();
        self.collect_items(&mut out);
        out
    }

    fn collect_items<'a>(&'a self, out: &mut Vec<&'a Item>) {
        match self {
            View::Item(item) => out.push(item),
            View::Section { children, .. } | View::List(children) | View::Columns(children) => {
                for child in children {
                    child.collect_items(out);
                }
            }
            _ => {}
        }
    }
}
