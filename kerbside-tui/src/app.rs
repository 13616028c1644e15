use std::sync::Arc;

use kerbside_core::model::{Collection, CouncilId};
use kerbside_core::service::KerbsideService;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Screen {
    CouncilSelect,
    PremisesEntry,
    ScheduleView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PremisesField {
    Postcode,
    Uprn,
}

pub(crate) struct App {
    pub service: Arc<KerbsideService>,

    pub screen: Screen,
    pub councils: Vec<(CouncilId, String)>,
    pub council_list_index: usize,
    pub selected_council: Option<CouncilId>,

    pub postcode_input: String,
    pub uprn_input: String,
    pub focused_field: PremisesField,

    pub collections: Vec<Collection>,

    pub is_loading: bool,
    pub error_message: Option<String>,
}

impl App {
    pub(crate) fn new(service: Arc<KerbsideService>) -> Self {
        let councils = service.councils();
        Self {
            service,
            screen: Screen::CouncilSelect,
            councils,
            council_list_index: 0,
            selected_council: None,
            postcode_input: String::new(),
            uprn_input: String::new(),
            focused_field: PremisesField::Postcode,
            collections: Vec::new(),
            is_loading: false,
            error_message: None,
        }
    }

    pub(crate) fn select_current_council(&mut self) {
        if let Some((id, _name)) = self.councils.get(self.council_list_index) {
            self.selected_council = Some(id.clone());
            self.screen = Screen::PremisesEntry;
        }
    }

    pub(crate) fn focused_input_mut(&mut self) -> &mut String {
        match self.focused_field {
            PremisesField::Postcode => &mut self.postcode_input,
            PremisesField::Uprn => &mut self.uprn_input,
        }
    }

    pub(crate) fn toggle_premises_field(&mut self) {
        self.focused_field = match self.focused_field {
            PremisesField::Postcode => PremisesField::Uprn,
            PremisesField::Uprn => PremisesField::Postcode,
        };
    }
}
