#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::mpsc;

    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
    use serde_json::json;

    use crate::autocomplete::{
        AutocompleteController, AutocompleteOptions, ClearSuggestions, Handlers, Suggestion,
    };
    use crate::provider::{Feature, FeatureCollection};
    use crate::worker::{FetchRequest, FetchResponse, WorkerChannels};

    /// Notifications recorded by the handlers of a test controller
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Change(String),
        Select {
            value: String,
            place_id: String,
            index: usize,
        },
        Error(u16),
    }

    pub type CallLog = Rc<RefCell<Vec<Call>>>;

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::empty(), KeyEventKind::Release)
    }

    pub fn feature(label: &str) -> Feature {
        serde_json::from_value(json!({
            "properties": {
                "label": label,
                "gid": format!("test:address:{}", label.to_lowercase()),
            }
        }))
        .unwrap()
    }

    pub fn collection(labels: &[&str]) -> FeatureCollection {
        FeatureCollection {
            features: labels.iter().map(|label| feature(label)).collect(),
        }
    }

    /// Inactive suggestions indexed in the given order
    pub fn suggestions(labels: &[&str]) -> Vec<Suggestion> {
        labels
            .iter()
            .enumerate()
            .map(|(index, label)| Suggestion::from_feature(feature(label), index))
            .collect()
    }

    /// Handlers that record every notification; `with_select` adds `on_select`,
    /// and errors always clear the list
    pub fn recording_handlers(with_select: bool) -> (Handlers, CallLog) {
        let calls: CallLog = Rc::new(RefCell::new(Vec::new()));

        let change_log = Rc::clone(&calls);
        let error_log = Rc::clone(&calls);
        let mut handlers = Handlers::new(move |value| {
            change_log.borrow_mut().push(Call::Change(value.to_string()));
        })
        .on_error(move |status, clear: ClearSuggestions<'_>| {
            error_log.borrow_mut().push(Call::Error(status));
            clear.clear();
        });

        if with_select {
            let select_log = Rc::clone(&calls);
            handlers = handlers.on_select(move |value, place_id, suggestion| {
                select_log.borrow_mut().push(Call::Select {
                    value: value.to_string(),
                    place_id: place_id.to_string(),
                    index: suggestion.index,
                });
            });
        }

        (handlers, calls)
    }

    pub fn controller_with(
        options: AutocompleteOptions,
        with_select: bool,
    ) -> (AutocompleteController, CallLog) {
        let (handlers, calls) = recording_handlers(with_select);
        (AutocompleteController::new(options, handlers), calls)
    }

    /// Controller already showing `labels`, none active
    pub fn populated_controller(
        labels: &[&str],
        with_select: bool,
    ) -> (AutocompleteController, CallLog) {
        let (mut controller, calls) = controller_with(AutocompleteOptions::default(), with_select);
        deliver(&mut controller, labels);
        (controller, calls)
    }

    /// Apply a successful response for the current request id
    pub fn deliver(controller: &mut AutocompleteController, labels: &[&str]) -> bool {
        let request_id = controller.current_request_id();
        controller.apply_response(FetchResponse::Success {
            request_id,
            collection: collection(labels),
        })
    }

    /// Both far ends of a worker connection, driven by hand in tests
    pub struct FakeWorker {
        pub requests: UnboundedReceiver<FetchRequest>,
        pub responses: mpsc::Sender<FetchResponse>,
    }

    impl FakeWorker {
        /// Every request sent so far, in order
        pub fn drain_requests(&mut self) -> Vec<FetchRequest> {
            let mut requests = Vec::new();
            while let Ok(request) = self.requests.try_recv() {
                requests.push(request);
            }
            requests
        }

        pub fn respond(&self, request_id: u64, labels: &[&str]) {
            self.responses
                .send(FetchResponse::Success {
                    request_id,
                    collection: collection(labels),
                })
                .unwrap();
        }
    }

    pub fn attach_fake_worker(controller: &mut AutocompleteController) -> FakeWorker {
        let (request_tx, requests) = unbounded_channel();
        let (responses, response_rx) = mpsc::channel();
        controller.set_channels(WorkerChannels {
            request_tx,
            response_rx,
        });
        FakeWorker {
            requests,
            responses,
        }
    }
}
