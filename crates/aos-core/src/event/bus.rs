// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use super::types::{Event, EventType};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// A subscriber callback. Handlers that need to mutate state capture it behind
/// a `RefCell`.
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// A single-threaded, queued publish/subscribe dispatcher.
///
/// `publish` only enqueues; nothing is delivered until [`process_events`]
/// drains the queue. Handlers run in subscription order and may themselves
/// publish: those events join the tail of the same queue and are delivered
/// before the current drain returns.
///
/// The bus is meant to be constructed once by the bootstrap and shared by
/// `Rc` with every producer and consumer.
///
/// [`process_events`]: EventBus::process_events
#[derive(Default)]
pub struct EventBus {
    queue: RefCell<VecDeque<Event>>,
    subscribers: RefCell<HashMap<EventType, Vec<EventHandler>>>,
    drain_limit: Option<usize>,
}

impl EventBus {
    /// Creates a bus whose drain runs until the queue is empty.
    pub fn new() -> Self {
        log::info!("EventBus initialized.");
        Self::default()
    }

    /// Creates a bus that dispatches at most `limit` events per drain.
    ///
    /// Events left over when the cap is reached stay queued for the next
    /// drain. This bounds a handler that republishes its own trigger type.
    pub fn with_drain_limit(limit: usize) -> Self {
        log::info!("EventBus initialized (drain limit: {limit}).");
        Self {
            drain_limit: Some(limit.max(1)),
            ..Self::default()
        }
    }

    /// Appends `handler` to the subscriber list of `kind`.
    ///
    /// Subscribing the same closure twice delivers twice.
    pub fn subscribe<F>(&self, kind: EventType, handler: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.subscribers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Rc::new(handler));
    }

    /// Queues `event` for the next drain. Never invokes a handler.
    pub fn publish(&self, event: Event) {
        log::trace!("Publishing {} event.", event.kind());
        self.queue.borrow_mut().push_back(event);
    }

    /// Drains the queue, delivering each event to its subscribers.
    ///
    /// Returns the number of events dequeued. Events without subscribers are
    /// dropped silently.
    pub fn process_events(&self) -> usize {
        let mut dispatched = 0;

        loop {
            if let Some(limit) = self.drain_limit {
                if dispatched >= limit {
                    let remaining = self.pending();
                    if remaining > 0 {
                        log::warn!(
                            "EventBus drain limit of {limit} reached; {remaining} event(s) deferred to the next drain."
                        );
                    }
                    break;
                }
            }

            // The queue borrow must end before any handler runs.
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };
            dispatched += 1;

            let handlers: Vec<EventHandler> = self
                .subscribers
                .borrow()
                .get(&event.kind())
                .cloned()
                .unwrap_or_default();

            log::trace!(
                "Dispatching {} event to {} handler(s).",
                event.kind(),
                handlers.len()
            );
            for handler in &handlers {
                handler(&event);
            }
        }

        dispatched
    }

    /// Drops every pending event and every subscriber.
    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
        self.subscribers.borrow_mut().clear();
        log::debug!("EventBus cleared.");
    }

    /// Number of events waiting for the next drain.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Number of handlers registered for `kind`.
    pub fn subscriber_count(&self, kind: EventType) -> usize {
        self.subscribers.borrow().get(&kind).map_or(0, Vec::len)
    }

    /// The per-drain dispatch cap, if one was configured.
    pub fn drain_limit(&self) -> Option<usize> {
        self.drain_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Journal = Rc<RefCell<Vec<String>>>;

    fn recorder(journal: &Journal, tag: &'static str) -> impl Fn(&Event) + 'static {
        let journal = Rc::clone(journal);
        move |event: &Event| journal.borrow_mut().push(format!("{tag}:{}", event.kind()))
    }

    #[test]
    fn publish_does_not_dispatch() {
        let bus = EventBus::new();
        let journal: Journal = Rc::default();
        bus.subscribe(EventType::KeyUp, recorder(&journal, "a"));

        bus.publish(Event::new(EventType::KeyUp));

        assert!(journal.borrow().is_empty());
        assert_eq!(bus.pending(), 1);
    }

    #[test]
    fn events_are_delivered_fifo_in_subscription_order() {
        let bus = EventBus::new();
        let journal: Journal = Rc::default();
        bus.subscribe(EventType::KeyUp, recorder(&journal, "first"));
        bus.subscribe(EventType::KeyDown, recorder(&journal, "down"));
        bus.subscribe(EventType::KeyUp, recorder(&journal, "second"));

        bus.publish(Event::new(EventType::KeyUp));
        bus.publish(Event::new(EventType::KeyDown));
        bus.publish(Event::new(EventType::KeyUp));

        assert_eq!(bus.process_events(), 3);
        assert_eq!(
            *journal.borrow(),
            vec![
                "first:KeyUp",
                "second:KeyUp",
                "down:KeyDown",
                "first:KeyUp",
                "second:KeyUp",
            ]
        );
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn duplicate_subscription_delivers_twice() {
        let bus = EventBus::new();
        let count = Rc::new(RefCell::new(0));
        for _ in 0..2 {
            let count = Rc::clone(&count);
            bus.subscribe(EventType::KeySelect, move |_| *count.borrow_mut() += 1);
        }

        bus.publish(Event::new(EventType::KeySelect));
        bus.process_events();

        assert_eq!(*count.borrow(), 2);
        assert_eq!(bus.subscriber_count(EventType::KeySelect), 2);
    }

    #[test]
    fn event_without_subscribers_is_dropped() {
        let bus = EventBus::new();
        bus.publish(Event::new(EventType::VoiceWake));

        assert_eq!(bus.process_events(), 1);
        assert_eq!(bus.pending(), 0);
    }

    #[test]
    fn cascaded_events_are_processed_in_the_same_drain() {
        let bus = Rc::new(EventBus::new());
        let journal: Journal = Rc::default();

        let weak = Rc::downgrade(&bus);
        bus.subscribe(EventType::KeySelect, move |_| {
            if let Some(bus) = weak.upgrade() {
                bus.publish(Event::new(EventType::Custom).with_payload("cascade"));
            }
        });
        bus.subscribe(EventType::KeySelect, recorder(&journal, "select"));
        bus.subscribe(EventType::Custom, recorder(&journal, "custom"));
        bus.subscribe(EventType::KeyBack, recorder(&journal, "back"));

        bus.publish(Event::new(EventType::KeySelect));
        bus.publish(Event::new(EventType::KeyBack));

        assert_eq!(bus.process_events(), 3);
        // The cascaded event joins the tail, behind the already queued KeyBack.
        assert_eq!(
            *journal.borrow(),
            vec!["select:KeySelect", "back:KeyBack", "custom:Custom"]
        );
    }

    #[test]
    fn drain_limit_defers_runaway_cascade() {
        let bus = Rc::new(EventBus::with_drain_limit(5));
        let count = Rc::new(RefCell::new(0));

        let weak = Rc::downgrade(&bus);
        let counter = Rc::clone(&count);
        bus.subscribe(EventType::Custom, move |event| {
            *counter.borrow_mut() += 1;
            if let Some(bus) = weak.upgrade() {
                bus.publish(event.clone());
            }
        });

        bus.publish(Event::new(EventType::Custom));

        assert_eq!(bus.process_events(), 5);
        assert_eq!(*count.borrow(), 5);
        assert_eq!(bus.pending(), 1);
        assert_eq!(bus.drain_limit(), Some(5));
    }

    #[test]
    fn clear_drops_queue_and_subscribers() {
        let bus = EventBus::new();
        let journal: Journal = Rc::default();
        bus.subscribe(EventType::KeyUp, recorder(&journal, "a"));
        bus.publish(Event::new(EventType::KeyUp));

        bus.clear();
        bus.publish(Event::new(EventType::KeyUp));
        bus.process_events();

        assert!(journal.borrow().is_empty());
        assert_eq!(bus.subscriber_count(EventType::KeyUp), 0);
    }

    #[test]
    fn handler_may_subscribe_during_dispatch() {
        let bus = Rc::new(EventBus::new());
        let journal: Journal = Rc::default();

        let weak = Rc::downgrade(&bus);
        let late = Rc::clone(&journal);
        bus.subscribe(EventType::SystemStartup, move |_| {
            if let Some(bus) = weak.upgrade() {
                let late = Rc::clone(&late);
                bus.subscribe(EventType::KeyUp, move |e| {
                    late.borrow_mut().push(format!("late:{}", e.kind()))
                });
            }
        });

        bus.publish(Event::new(EventType::SystemStartup));
        bus.publish(Event::new(EventType::KeyUp));
        bus.process_events();

        assert_eq!(*journal.borrow(), vec!["late:KeyUp"]);
    }
}
