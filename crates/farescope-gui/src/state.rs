use chrono::NaiveDate;
use farescope_models::{
    AirportOption, CabinClass, FlightSearchResponse, SearchCriteria, SortOrder, TripType,
};

// ── Airport autocomplete fields ───────────────────────────────────────

/// Which of the two airport fields an action targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirportField {
    Origin,
    Destination,
}

/// Freshness token for one in-flight airport lookup.
///
/// Tokens are issued monotonically per field by [`FormState::begin_lookup`];
/// only the completion carrying the latest issued token may update the
/// visible options, so a slow response for a stale query can never
/// overwrite a newer result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupToken(u64);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AirportFieldState {
    /// Raw text currently in the input.
    pub query: String,
    /// The airport picked from the dropdown, if any.
    pub selected: Option<AirportOption>,
    /// Options currently shown in the dropdown.
    pub options: Vec<AirportOption>,
    pub loading: bool,
    latest_token: u64,
}

impl AirportFieldState {
    fn is_current(&self, token: LookupToken) -> bool {
        self.latest_token == token.0
    }
}

// ── Validation ────────────────────────────────────────────────────────

/// A required form field found empty at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Origin,
    Destination,
    DepartureDate,
    ReturnDate,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Origin => "origin airport",
            FormField::Destination => "destination airport",
            FormField::DepartureDate => "departure date",
            FormField::ReturnDate => "return date",
        }
    }
}

// ── Form state & transitions ──────────────────────────────────────────

/// State transitions of the search form.
///
/// Every user interaction maps to one action; [`FormState::apply`] is the
/// only way state changes outside the lookup handshake.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    SetTripType(TripType),
    SetPassengers(u8),
    SetCabinClass(CabinClass),
    SetDepartureDate(Option<NaiveDate>),
    SetReturnDate(Option<NaiveDate>),
    /// The user typed in an airport field. Clears the field's selection.
    QueryChanged(AirportField, String),
    /// The user picked an option from a field's dropdown.
    SelectAirport(AirportField, AirportOption),
    SearchStarted,
    SearchFinished,
    ValidationFailed(Vec<FormField>),
}

/// The whole search form as one immutable value.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub trip_type: TripType,
    pub passengers: u8,
    pub cabin_class: CabinClass,
    pub origin: AirportFieldState,
    pub destination: AirportFieldState,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    /// A flight search is in flight.
    pub searching: bool,
    /// Fields flagged by the last failed validation, for the banner.
    pub missing: Vec<FormField>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            trip_type: TripType::RoundTrip,
            passengers: 1,
            cabin_class: CabinClass::Economy,
            origin: AirportFieldState::default(),
            destination: AirportFieldState::default(),
            departure_date: None,
            return_date: None,
            searching: false,
            missing: Vec::new(),
        }
    }
}

impl FormState {
    /// Read access to one airport field's state.
    pub fn airport(&self, field: AirportField) -> &AirportFieldState {
        self.field(field)
    }

    fn field(&self, field: AirportField) -> &AirportFieldState {
        match field {
            AirportField::Origin => &self.origin,
            AirportField::Destination => &self.destination,
        }
    }

    fn field_mut(&mut self, field: AirportField) -> &mut AirportFieldState {
        match field {
            AirportField::Origin => &mut self.origin,
            AirportField::Destination => &mut self.destination,
        }
    }

    /// Apply one transition, returning the next state.
    pub fn apply(&self, action: FormAction) -> FormState {
        let mut next = self.clone();
        match action {
            FormAction::SetTripType(t) => {
                next.trip_type = t;
                if !t.has_return() {
                    next.return_date = None;
                }
            }
            FormAction::SetPassengers(n) => next.passengers = n,
            FormAction::SetCabinClass(c) => next.cabin_class = c,
            FormAction::SetDepartureDate(d) => next.departure_date = d,
            FormAction::SetReturnDate(d) => next.return_date = d,
            FormAction::QueryChanged(field, query) => {
                let f = next.field_mut(field);
                f.query = query;
                f.selected = None;
                if f.query.is_empty() {
                    f.options.clear();
                    f.loading = false;
                    // A cleared field issues no new lookup, so any response
                    // still in flight is stale by definition.
                    f.latest_token += 1;
                }
            }
            FormAction::SelectAirport(field, option) => {
                let f = next.field_mut(field);
                f.query = option.label.clone();
                f.selected = Some(option);
                f.options.clear();
                f.loading = false;
                // Invalidate any lookup still in flight for the old query.
                f.latest_token += 1;
            }
            FormAction::SearchStarted => {
                next.searching = true;
                next.missing.clear();
            }
            FormAction::SearchFinished => next.searching = false,
            FormAction::ValidationFailed(missing) => next.missing = missing,
        }
        next
    }

    // ── Lookup handshake ──────────────────────────────────────────────

    /// Start an airport lookup on `field`.
    ///
    /// Bumps the field's freshness token and marks it loading. The caller
    /// passes the returned token back to [`finish_lookup`](Self::finish_lookup)
    /// or [`fail_lookup`](Self::fail_lookup) when the request resolves.
    pub fn begin_lookup(&self, field: AirportField) -> (FormState, LookupToken) {
        let mut next = self.clone();
        let f = next.field_mut(field);
        f.latest_token += 1;
        f.loading = true;
        let token = LookupToken(f.latest_token);
        (next, token)
    }

    /// Complete a lookup. A stale token leaves the state untouched.
    pub fn finish_lookup(
        &self,
        field: AirportField,
        token: LookupToken,
        options: Vec<AirportOption>,
    ) -> FormState {
        if !self.field(field).is_current(token) {
            return self.clone();
        }
        let mut next = self.clone();
        let f = next.field_mut(field);
        f.options = options;
        f.loading = false;
        next
    }

    /// Record a failed lookup: no results, loading cleared. A stale token
    /// leaves the state untouched.
    pub fn fail_lookup(&self, field: AirportField, token: LookupToken) -> FormState {
        self.finish_lookup(field, token, Vec::new())
    }

    // ── Validation ────────────────────────────────────────────────────

    /// Check the cross-field requirements and build the criteria.
    ///
    /// Origin, destination and departure date are always required; the
    /// return date additionally when the trip type collects one. On
    /// success the criteria carries the selected airports' identifiers.
    pub fn validate(&self) -> Result<SearchCriteria, Vec<FormField>> {
        let mut missing = Vec::new();
        if self.origin.selected.is_none() {
            missing.push(FormField::Origin);
        }
        if self.destination.selected.is_none() {
            missing.push(FormField::Destination);
        }
        if self.departure_date.is_none() {
            missing.push(FormField::DepartureDate);
        }
        if self.trip_type.has_return() && self.return_date.is_none() {
            missing.push(FormField::ReturnDate);
        }
        if !missing.is_empty() {
            return Err(missing);
        }

        let (Some(origin), Some(destination)) = (
            self.origin.selected.as_ref(),
            self.destination.selected.as_ref(),
        ) else {
            return Err(missing);
        };
        Ok(SearchCriteria {
            origin_sky_id: Some(origin.sky_id.clone()),
            destination_sky_id: Some(destination.sky_id.clone()),
            origin_entity_id: Some(origin.entity_id.clone()),
            destination_entity_id: Some(destination.entity_id.clone()),
            departure_date: self.departure_date,
            return_date: self.return_date,
            cabin_class: self.cabin_class,
            passengers: self.passengers,
            sort_order: SortOrder::Best,
        })
    }
}

// ── Cross-view session ────────────────────────────────────────────────

/// In-memory navigation state: the raw flight-search response handed from
/// the form to the results view. Cleared on every new search, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSession {
    pub flights: Option<FlightSearchResponse>,
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn option(label: &str, sky_id: &str, entity_id: &str) -> AirportOption {
        AirportOption {
            label: label.to_string(),
            sky_id: sky_id.to_string(),
            entity_id: entity_id.to_string(),
        }
    }

    fn jfk() -> AirportOption {
        option("New York John F. Kennedy (JFK)", "JFK", "95565058")
    }

    fn lax() -> AirportOption {
        option("Los Angeles (LAX)", "LAX", "95565077")
    }

    #[test]
    fn stale_lookup_is_discarded() {
        let state = FormState::default();
        let (state, first) = state.begin_lookup(AirportField::Origin);
        let (state, second) = state.begin_lookup(AirportField::Origin);

        // The newer lookup resolves first.
        let state = state.finish_lookup(AirportField::Origin, second, vec![lax()]);
        assert_eq!(state.origin.options, vec![lax()]);
        assert!(!state.origin.loading);

        // The stale one arrives late and must not overwrite it.
        let state = state.finish_lookup(AirportField::Origin, first, vec![jfk()]);
        assert_eq!(state.origin.options, vec![lax()]);
    }

    #[test]
    fn current_lookup_is_applied() {
        let (state, token) = FormState::default().begin_lookup(AirportField::Destination);
        assert!(state.destination.loading);
        let state = state.finish_lookup(AirportField::Destination, token, vec![jfk()]);
        assert_eq!(state.destination.options, vec![jfk()]);
        assert!(!state.destination.loading);
    }

    #[test]
    fn stale_failure_keeps_newer_loading() {
        let state = FormState::default();
        let (state, first) = state.begin_lookup(AirportField::Origin);
        let (state, _second) = state.begin_lookup(AirportField::Origin);
        let state = state.fail_lookup(AirportField::Origin, first);
        assert!(state.origin.loading, "newer lookup still in flight");
    }

    #[test]
    fn fields_are_fenced_independently() {
        let state = FormState::default();
        let (state, origin_token) = state.begin_lookup(AirportField::Origin);
        let (state, _) = state.begin_lookup(AirportField::Destination);
        let state = state.finish_lookup(AirportField::Origin, origin_token, vec![jfk()]);
        assert_eq!(state.origin.options, vec![jfk()]);
        assert!(state.destination.loading);
    }

    #[test]
    fn typing_clears_selection() {
        let state = FormState::default()
            .apply(FormAction::SelectAirport(AirportField::Origin, jfk()));
        assert_eq!(state.origin.query, jfk().label);
        assert_eq!(state.origin.selected, Some(jfk()));

        let state = state.apply(FormAction::QueryChanged(
            AirportField::Origin,
            "new".to_string(),
        ));
        assert_eq!(state.origin.selected, None);
        assert_eq!(state.origin.query, "new");
    }

    #[test]
    fn clearing_query_invalidates_inflight_lookup() {
        let state = FormState::default().apply(FormAction::QueryChanged(
            AirportField::Origin,
            "ne".to_string(),
        ));
        let (state, token) = state.begin_lookup(AirportField::Origin);

        // The field is emptied while the lookup is still in flight.
        let state = state.apply(FormAction::QueryChanged(
            AirportField::Origin,
            String::new(),
        ));

        // The late response must not repopulate the cleared field.
        let state = state.finish_lookup(
            AirportField::Origin,
            token,
            vec![option("New York Newark (EWR)", "EWR", "95565059")],
        );
        assert!(state.origin.options.is_empty());
        assert!(!state.origin.loading);
    }

    #[test]
    fn selection_invalidates_inflight_lookup() {
        let state = FormState::default().apply(FormAction::QueryChanged(
            AirportField::Origin,
            "new york".to_string(),
        ));
        let (state, token) = state.begin_lookup(AirportField::Origin);

        let state = state.apply(FormAction::SelectAirport(AirportField::Origin, jfk()));

        // The late response must not bring the old dropdown back.
        let state = state.finish_lookup(AirportField::Origin, token, vec![lax()]);
        assert!(state.origin.options.is_empty());
        assert_eq!(state.origin.selected, Some(jfk()));
        assert_eq!(state.origin.query, jfk().label);
    }

    #[test]
    fn clearing_query_drops_options() {
        let (state, token) = FormState::default().begin_lookup(AirportField::Origin);
        let state = state.finish_lookup(AirportField::Origin, token, vec![jfk()]);
        let state = state.apply(FormAction::QueryChanged(
            AirportField::Origin,
            String::new(),
        ));
        assert!(state.origin.options.is_empty());
        assert!(!state.origin.loading);
    }

    #[test]
    fn one_way_drops_return_date() {
        let state = FormState {
            return_date: NaiveDate::from_ymd_opt(2025, 6, 8),
            ..FormState::default()
        };
        let state = state.apply(FormAction::SetTripType(TripType::OneWay));
        assert_eq!(state.return_date, None);
    }

    #[test]
    fn empty_form_lists_every_missing_field() {
        let missing = FormState::default().validate().unwrap_err();
        assert_eq!(
            missing,
            vec![
                FormField::Origin,
                FormField::Destination,
                FormField::DepartureDate,
                FormField::ReturnDate,
            ]
        );
    }

    #[test]
    fn one_way_does_not_require_return_date() {
        let state = FormState {
            trip_type: TripType::OneWay,
            departure_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..FormState::default()
        }
        .apply(FormAction::SelectAirport(AirportField::Origin, jfk()))
        .apply(FormAction::SelectAirport(AirportField::Destination, lax()));

        let criteria = state.validate().unwrap();
        assert_eq!(criteria.origin_sky_id.as_deref(), Some("JFK"));
        assert_eq!(criteria.destination_sky_id.as_deref(), Some("LAX"));
        assert_eq!(criteria.return_date, None);
    }

    #[test]
    fn validated_criteria_carries_selected_ids() {
        let state = FormState {
            departure_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            return_date: NaiveDate::from_ymd_opt(2025, 6, 8),
            passengers: 3,
            cabin_class: CabinClass::Business,
            ..FormState::default()
        }
        .apply(FormAction::SelectAirport(AirportField::Origin, jfk()))
        .apply(FormAction::SelectAirport(AirportField::Destination, lax()));

        let criteria = state.validate().unwrap();
        assert_eq!(criteria.origin_entity_id.as_deref(), Some("95565058"));
        assert_eq!(criteria.destination_entity_id.as_deref(), Some("95565077"));
        assert_eq!(criteria.passengers, 3);
        assert_eq!(criteria.cabin_class, CabinClass::Business);
    }

    #[test]
    fn search_started_clears_validation_banner() {
        let state = FormState::default()
            .apply(FormAction::ValidationFailed(vec![FormField::Origin]))
            .apply(FormAction::SearchStarted);
        assert!(state.missing.is_empty());
        assert!(state.searching);
        let state = state.apply(FormAction::SearchFinished);
        assert!(!state.searching);
    }
}
