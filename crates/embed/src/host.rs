//! Inserting an encoded chart through the host's document API

use std::collections::BTreeMap;

use chartflow_config::ConfigValidator;
use chartflow_shared::wire::CANVAS_TAG;
use chartflow_shared::ChartConfiguration;
use serde::{Deserialize, Serialize};

use crate::encoder::{encode, EmbedPayload};
use crate::scripts::setup_instructions;
use crate::Result;

/// Element to be created by the host, with its children
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    /// `<div>` container with a single `<canvas>` child
    pub fn from_payload(payload: &EmbedPayload) -> Self {
        let canvas = ElementSpec {
            tag: CANVAS_TAG.to_string(),
            attributes: payload.attributes.canvas.clone(),
            children: Vec::new(),
        };

        ElementSpec {
            tag: "div".to_string(),
            attributes: payload.attributes.container.clone(),
            children: vec![canvas],
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-facing message shown through the host's notification area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    #[serde(rename = "type")]
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Authoring-side document capabilities supplied by the host.
///
/// The designer API is promise based, so every step is awaited before the
/// next one starts.
#[allow(async_fn_in_trait)]
pub trait HostDocument {
    /// Whether something is selected that can take children
    async fn selection_accepts_children(&mut self) -> Result<bool>;

    /// Append `element` (and its children) to the current selection
    async fn append_to_selection(&mut self, element: &ElementSpec) -> Result<()>;

    async fn notify(&mut self, notice: Notice);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { instance_id: String },
    NoSelection,
}

pub const NO_SELECTION_MESSAGE: &str =
    "Please select an element on the page where you want to insert the chart.";
pub const INSERTED_MESSAGE: &str =
    "Chart inserted! Add scripts to Page Settings to see it on published site.";

/// Encode `cfg` and append it at the host's current selection.
///
/// Validation problems are logged but do not block insertion. The success
/// notice is only sent once the append has completed; host failures are
/// reported to the user and returned.
pub async fn insert_chart<H>(host: &mut H, cfg: &ChartConfiguration) -> Result<InsertOutcome>
where
    H: HostDocument,
{
    let report = ConfigValidator::validate(cfg);
    for error in &report.errors {
        log::warn!("Inserting chart {} with invalid configuration: {}", cfg.id, error);
    }

    let payload = encode(cfg)?;
    let element = ElementSpec::from_payload(&payload);

    let result = match host.selection_accepts_children().await {
        Ok(true) => host.append_to_selection(&element).await.map(|()| true),
        other => other,
    };

    match result {
        Ok(true) => {
            host.notify(Notice::success(INSERTED_MESSAGE)).await;
            log::info!("Chart inserted successfully, instance {}", payload.id);
            for line in setup_instructions() {
                log::info!("{line}");
            }
            Ok(InsertOutcome::Inserted {
                instance_id: payload.id,
            })
        }
        Ok(false) => {
            host.notify(Notice::error(NO_SELECTION_MESSAGE)).await;
            Ok(InsertOutcome::NoSelection)
        }
        Err(err) => {
            log::error!("Error inserting chart: {err}");
            host.notify(Notice::error(format!("Failed to insert chart: {err}")))
                .await;
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EmbedError;
    use chartflow_config::create;
    use chartflow_shared::wire::{CONFIG_ATTR, CONTAINER_ID_ATTR};
    use chartflow_shared::ChartType;
    use futures::executor::block_on;
    use futures::future::{select, Either};
    use std::pin::pin;

    #[derive(Default)]
    struct FakeHost {
        has_selection: bool,
        fail_append: bool,
        /// Polls the append future must wait before it settles
        append_delay: usize,
        events: Vec<String>,
        appended: Vec<ElementSpec>,
        notices: Vec<Notice>,
    }

    /// Yields back to the executor `polls` times
    async fn settle_after(polls: usize) {
        for _ in 0..polls {
            let mut yielded = false;
            futures::future::poll_fn(|cx| {
                if yielded {
                    std::task::Poll::Ready(())
                } else {
                    yielded = true;
                    cx.waker().wake_by_ref();
                    std::task::Poll::Pending
                }
            })
            .await;
        }
    }

    impl HostDocument for FakeHost {
        async fn selection_accepts_children(&mut self) -> Result<bool> {
            self.events.push("selection".to_string());
            Ok(self.has_selection)
        }

        async fn append_to_selection(&mut self, element: &ElementSpec) -> Result<()> {
            settle_after(self.append_delay).await;
            if self.fail_append {
                self.events.push("append failed".to_string());
                return Err(EmbedError::Host {
                    message: "element is locked".to_string(),
                });
            }
            self.events.push("appended".to_string());
            self.appended.push(element.clone());
            Ok(())
        }

        async fn notify(&mut self, notice: Notice) {
            self.events.push(format!("notify {:?}", notice.kind));
            self.notices.push(notice);
        }
    }

    #[test]
    fn test_insert_appends_container_with_canvas() {
        let mut host = FakeHost {
            has_selection: true,
            ..Default::default()
        };
        let cfg = create(ChartType::Bar);

        let outcome = block_on(insert_chart(&mut host, &cfg)).unwrap();
        let InsertOutcome::Inserted { instance_id } = outcome else {
            panic!("expected insertion");
        };

        let container = &host.appended[0];
        assert_eq!(container.tag, "div");
        assert_eq!(container.attributes[CONTAINER_ID_ATTR], instance_id);
        assert!(container.attributes.contains_key(CONFIG_ATTR));
        assert_eq!(container.children.len(), 1);
        assert_eq!(container.children[0].tag, "canvas");
        assert_eq!(host.notices, vec![Notice::success(INSERTED_MESSAGE)]);
    }

    #[test]
    fn test_success_notice_waits_for_slow_append() {
        let mut host = FakeHost {
            has_selection: true,
            append_delay: 5,
            ..Default::default()
        };

        block_on(insert_chart(&mut host, &create(ChartType::Line))).unwrap();
        assert_eq!(host.events, vec!["selection", "appended", "notify Success"]);
    }

    #[test]
    fn test_insertion_stays_pending_until_host_settles() {
        let mut host = FakeHost {
            has_selection: true,
            append_delay: usize::MAX,
            ..Default::default()
        };
        let cfg = create(ChartType::Bar);

        let winner = block_on(async {
            let insertion = pin!(insert_chart(&mut host, &cfg));
            match select(insertion, pin!(settle_after(20))).await {
                Either::Left(_) => "insertion",
                Either::Right(_) => "host still busy",
            }
        });

        assert_eq!(winner, "host still busy");
        assert_eq!(host.events, vec!["selection"]);
        assert!(host.notices.is_empty());
    }

    #[test]
    fn test_insert_without_selection_notifies() {
        let mut host = FakeHost::default();
        let outcome = block_on(insert_chart(&mut host, &create(ChartType::Line))).unwrap();

        assert_eq!(outcome, InsertOutcome::NoSelection);
        assert!(host.appended.is_empty());
        assert_eq!(host.notices, vec![Notice::error(NO_SELECTION_MESSAGE)]);
    }

    #[test]
    fn test_async_append_failure_is_reported_and_returned() {
        let mut host = FakeHost {
            has_selection: true,
            fail_append: true,
            append_delay: 3,
            ..Default::default()
        };

        let err = block_on(insert_chart(&mut host, &create(ChartType::Pie))).unwrap_err();
        assert!(matches!(err, EmbedError::Host { .. }));
        assert_eq!(host.events, vec!["selection", "append failed", "notify Error"]);
        assert_eq!(host.notices.len(), 1);
        assert_eq!(host.notices[0].kind, NoticeKind::Error);
        assert!(host.notices[0].message.contains("element is locked"));
    }
}
