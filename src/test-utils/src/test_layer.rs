// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::HashMap;
use std::sync::{Mutex, Once};
use tracing::{Event, Subscriber, field, span};
use tracing_subscriber::{self, Layer, layer::Context, prelude::*, registry::SpanRef};

const ROOT_SPAN: &str = "test_layer";

/// A span or an event captured while a test was running.
#[derive(Debug, Clone)]
pub struct Captured {
    /// The span name, or the name of the span enclosing an event.
    pub name: String,
    /// `true` for events (`debug!()`, `warn!()`, ...), `false` for spans.
    pub is_event: bool,
    /// The level of the span or event.
    pub level: tracing::Level,
    /// The fields, formatted as strings. Events store their text in `message`.
    pub attributes: HashMap<String, String>,
    test_id: Option<String>,
}

struct Visitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for Visitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

struct CaptureLog {
    entries: Mutex<Vec<(Option<span::Id>, Captured)>>,
}

impl CaptureLog {
    const fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, id: Option<span::Id>, entry: Captured) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((id, entry));
        }
    }

    fn take(&self, test_id: &str) -> Vec<Captured> {
        let Ok(mut entries) = self.entries.lock() else {
            return Vec::new();
        };
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut *entries)
            .into_iter()
            .partition(|(_, e)| e.test_id.as_deref() == Some(test_id));
        *entries = kept;
        taken.into_iter().map(|(_, e)| e).collect()
    }

    fn clear(&self, test_id: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|(_, e)| e.test_id.as_deref() != Some(test_id));
        }
    }
}

static LOG: CaptureLog = CaptureLog::new();
static INIT: Once = Once::new();

#[derive(Clone, Debug)]
struct TestId(String);

fn find_test_id<S>(span: Option<SpanRef<'_, S>>) -> Option<String>
where
    S: Subscriber + for<'b> tracing_subscriber::registry::LookupSpan<'b>,
{
    let span = span?;
    span.scope()
        .find(|s| s.name() == ROOT_SPAN)
        .and_then(|s| s.extensions().get::<TestId>().map(|t| t.0.clone()))
}

/// Captures spans and events emitted by the code under test.
///
/// Install it with [TestLayer::initialize], using a different id for each
/// test, and keep the guard alive while the code under test runs. Then call
/// [TestLayer::capture] with the same id.
///
/// # Example
/// ```
/// use cloud_sdk_test_utils::test_layer::TestLayer;
/// const TEST_ID: &str = "doc_example";
/// let guard = TestLayer::initialize(TEST_ID);
/// tracing::debug_span!("marshall", operation = "Search").in_scope(|| {
///     tracing::debug!(size = 42, "marshalled request");
/// });
/// drop(guard);
/// let captured = TestLayer::capture(TEST_ID);
/// assert_eq!(captured.len(), 2);
/// assert!(captured.iter().any(|c| c.is_event && c.name == "marshall"));
/// ```
#[derive(Clone, Default)]
pub struct TestLayer;

impl TestLayer {
    /// Installs the layer (once per process) and starts a capture scope.
    pub fn initialize(test_id: &'static str) -> tracing::span::EnteredSpan {
        INIT.call_once(|| {
            let subscriber = tracing_subscriber::registry().with(TestLayer);
            // Another global subscriber may already be installed. The capture
            // is then empty, and the tests report that.
            let _ = tracing::subscriber::set_global_default(subscriber);
        });
        LOG.clear(test_id);
        tracing::span!(tracing::Level::TRACE, ROOT_SPAN, test_id = test_id).entered()
    }

    /// Removes and returns everything captured for `test_id`.
    pub fn capture(test_id: &str) -> Vec<Captured> {
        LOG.take(test_id)
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut Visitor(&mut attributes));
        let Some(span) = ctx.span(id) else {
            return;
        };
        if span.name() == ROOT_SPAN {
            if let Some(test_id) = attributes.get("test_id") {
                span.extensions_mut().insert(TestId(test_id.clone()));
            }
            return;
        }
        let entry = Captured {
            name: span.name().to_string(),
            is_event: false,
            level: *span.metadata().level(),
            attributes,
            test_id: find_test_id(Some(span)),
        };
        LOG.push(Some(id.clone()), entry);
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, _ctx: Context<'_, S>) {
        let Ok(mut entries) = LOG.entries.lock() else {
            return;
        };
        if let Some((_, entry)) = entries
            .iter_mut()
            .find(|(i, e)| !e.is_event && i.as_ref() == Some(id))
        {
            values.record(&mut Visitor(&mut entry.attributes));
        }
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        event.record(&mut Visitor(&mut attributes));
        let span = ctx.event_span(event);
        let name = span
            .as_ref()
            .map(|s| s.name().to_string())
            .unwrap_or_default();
        let entry = Captured {
            name,
            is_event: true,
            level: *event.metadata().level(),
            attributes,
            test_id: find_test_id(span),
        };
        LOG.push(None, entry);
    }
}
