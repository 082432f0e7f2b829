//! Post records and the composer-to-feed delivery bus.

use std::sync::{Arc, Mutex, Weak};

use uuid::Uuid;

/// Maximum length of a composed post, in characters.
pub const MAX_POST_LEN: usize = 280;

/// A single feed entry. Timestamps are display labels, not parsed times.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
	pub id: String,
	pub author: String,
	pub handle: String,
	pub content: String,
	pub timestamp: String,
	pub likes: u32,
	pub replies: u32,
	pub is_local: bool,
}

impl Post {
	/// Build a locally composed post with a fresh id.
	pub fn local(content: impl Into<String>) -> Self {
		Self {
			id: Uuid::new_v4().to_string(),
			author: "You".into(),
			handle: "@local".into(),
			content: content.into(),
			timestamp: "Just now".into(),
			likes: 0,
			replies: 0,
			is_local: true,
		}
	}
}

/// Hardcoded remote posts shown before anything is composed locally.
pub fn sample_posts() -> Vec<Post> {
	vec![
		Post {
			id: "sample-1".into(),
			author: "John Doe".into(),
			handle: "@johndoe".into(),
			content: "Just deployed my first AI model! 🚀 #MachineLearning".into(),
			timestamp: "2h ago".into(),
			likes: 42,
			replies: 5,
			is_local: false,
		},
		Post {
			id: "sample-2".into(),
			author: "Jane Smith".into(),
			handle: "@janesmith".into(),
			content: "Graph theory is fascinating! Working on a new visualization project."
				.into(),
			timestamp: "4h ago".into(),
			likes: 28,
			replies: 3,
			is_local: false,
		},
	]
}

type Listener = Arc<dyn Fn(&Post) + Send + Sync>;

#[derive(Default)]
struct BusInner {
	next_token: usize,
	listeners: Vec<(usize, Listener)>,
}

/// Synchronous, in-order delivery channel from the composer to the feed.
///
/// There is no buffering: publishing while nothing is subscribed drops the
/// post. The page that owns both endpoints hands the bus to each of them,
/// keeping the dependency direction explicit.
#[derive(Clone, Default)]
pub struct PostBus {
	inner: Arc<Mutex<BusInner>>,
}

impl PostBus {
	pub fn new() -> Self {
		Self::default()
	}

	/// Deliver `post` to every live subscriber, in subscription order.
	pub fn publish(&self, post: &Post) {
		// Snapshot first so a listener may subscribe or drop its handle
		// while being called.
		let listeners: Vec<Listener> = self
			.inner
			.lock()
			.unwrap()
			.listeners
			.iter()
			.map(|(_, listener)| listener.clone())
			.collect();
		for listener in listeners {
			listener(post);
		}
	}

	/// Register `listener`. Delivery stops when the returned handle drops.
	pub fn subscribe(&self, listener: impl Fn(&Post) + Send + Sync + 'static) -> Subscription {
		let mut inner = self.inner.lock().unwrap();
		let token = inner.next_token;
		inner.next_token += 1;
		inner.listeners.push((token, Arc::new(listener)));
		Subscription {
			token,
			bus: Arc::downgrade(&self.inner),
		}
	}
}

/// Scoped registration on a [`PostBus`]; unsubscribes when dropped.
pub struct Subscription {
	token: usize,
	bus: Weak<Mutex<BusInner>>,
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(inner) = self.bus.upgrade() {
			inner
				.lock()
				.unwrap()
				.listeners
				.retain(|(token, _)| *token != self.token);
		}
	}
}
