//! # Storefront Host
//!
//! Composes the cart, the catalog and the cart panel, turning
//! [`HostEvent`]s into state changes and panel side effects into
//! [`HostNotification`]s.
//!
//! ## Event Handling
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Event                  Cart / Catalog              Panel               │
//! │  ─────                  ──────────────              ─────               │
//! │  RequestState(s) ────────────────────────────────► request_state(s)     │
//! │  ItemAdded ───────────► cart.add ──────────────────► set_item_count     │
//! │                         (full ─► ItemAdditionRejected)                  │
//! │  ItemRemoved ─────────► cart.remove ───────────────► set_item_count     │
//! │                         (NotInCart ─► ItemRemovalIgnored)               │
//! │  CatalogChanged ──────► catalog.replace ─► WeaveResult                  │
//! │  CategorySelected ────► catalog.select ──► WeaveResult                  │
//! │  BackdropRevealed(b) ───────────────────────────► Hidden / Collapsed    │
//! │  ViewportResized ─────► catalog layout ──► WeaveResult ─► set_viewport  │
//! │  Checkout ────────────► cart.clear ────────────────► Collapsed once     │
//! │                                                      settled Expanded   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use tracing::{debug, info, warn};

use shrine_core::validation::validate_item;
use shrine_core::{Cart, CoreError, Removal, Viewport};
use shrine_panel::{CartState, PanelController, PanelFrame, PanelObserver, PanelRequests};

use crate::catalog::CatalogState;
use crate::config::StorefrontConfig;
use crate::error::{HostError, HostResult};
use crate::events::{HostEvent, HostNotification};

// =============================================================================
// Notification Sink
// =============================================================================

/// Where the host sends notifications.
pub trait NotificationSink {
    fn notify(&mut self, notification: HostNotification) -> HostResult<()>;
}

impl NotificationSink for Vec<HostNotification> {
    fn notify(&mut self, notification: HostNotification) -> HostResult<()> {
        self.push(notification);
        Ok(())
    }
}

/// Forwards panel callbacks to a sink and chains the post-checkout collapse.
struct PanelBridge<'a> {
    sink: &'a mut dyn NotificationSink,
    collapse_after_checkout: &'a mut bool,
    error: Option<HostError>,
}

impl<'a> PanelBridge<'a> {
    fn new(sink: &'a mut dyn NotificationSink, collapse_after_checkout: &'a mut bool) -> Self {
        PanelBridge {
            sink,
            collapse_after_checkout,
            error: None,
        }
    }

    fn send(&mut self, notification: HostNotification) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.sink.notify(notification) {
            self.error = Some(e);
        }
    }

    /// First sink failure seen during the callbacks.
    fn finish(self) -> HostResult<()> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl PanelObserver for PanelBridge<'_> {
    fn state_changed(&mut self, state: CartState) {
        self.send(HostNotification::StateChanged { state });
    }

    fn geometry_updated(&mut self, frame: &PanelFrame) {
        self.send(HostNotification::GeometryUpdated { frame: *frame });
    }

    fn transition_finished(&mut self, state: CartState, requests: &mut PanelRequests) {
        if !*self.collapse_after_checkout {
            return;
        }
        // any settled state ends the wait; only a settled Expanded collapses
        *self.collapse_after_checkout = false;
        if state == CartState::Expanded {
            debug!("Collapsing cart panel after checkout");
            requests.request(CartState::Collapsed);
        }
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// The storefront host: owns the cart and the catalog, drives the panel.
#[derive(Debug)]
pub struct Storefront {
    cart: Cart,
    catalog: CatalogState,
    panel: PanelController,
    collapse_after_checkout: bool,
}

impl Storefront {
    pub fn new(config: &StorefrontConfig) -> HostResult<Self> {
        let viewport = config.viewport()?;
        Ok(Storefront {
            cart: Cart::new(),
            catalog: CatalogState::new(config.catalog.category, viewport),
            panel: PanelController::new(
                config.panel.initial_state,
                0,
                viewport,
                config.transition_table(),
            ),
            collapse_after_checkout: false,
        })
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn panel(&self) -> &PanelController {
        &self.panel
    }

    /// Applies one event at frame time `now`.
    pub fn handle(
        &mut self,
        event: HostEvent,
        now: Duration,
        sink: &mut dyn NotificationSink,
    ) -> HostResult<()> {
        match event {
            HostEvent::RequestState { state } => {
                self.request_state(state, now, sink)?;
            }

            HostEvent::ItemAdded { item } => {
                validate_item(&item)?;
                debug!(item_id = %item.id, title = %item.title, "Adding item to cart");
                let id = item.id;
                match self.cart.add(item) {
                    Ok(()) => self.cart_changed(sink)?,
                    Err(CoreError::CartTooLarge { max }) => {
                        warn!(item_id = %id, max, "Cart is full, item not added");
                        sink.notify(HostNotification::ItemAdditionRejected { id, max })?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }

            HostEvent::ItemRemoved { id } => match self.cart.remove(id) {
                Removal::Removed(item) => {
                    debug!(item_id = %item.id, title = %item.title, "Removed item from cart");
                    self.cart_changed(sink)?;
                }
                Removal::NotInCart(id) => {
                    warn!(item_id = %id, "Ignoring removal of an item not in the cart");
                    sink.notify(HostNotification::ItemRemovalIgnored { id })?;
                }
            },

            HostEvent::CatalogChanged { items } => {
                self.catalog.replace(items)?;
                sink.notify(self.catalog.weave_result())?;
            }

            HostEvent::CategorySelected { category } => {
                if self.catalog.select(category) {
                    sink.notify(self.catalog.weave_result())?;
                }
            }

            HostEvent::BackdropRevealed { revealed } => {
                let target = if revealed {
                    CartState::Hidden
                } else {
                    CartState::Collapsed
                };
                self.request_state(target, now, sink)?;
            }

            HostEvent::ViewportResized { width, height } => {
                let viewport = Viewport::try_new(width, height)?;
                info!(width, height, "Viewport resized");
                self.catalog.set_viewport(viewport);
                self.panel.set_viewport(viewport);
                sink.notify(self.catalog.weave_result())?;
            }

            HostEvent::Checkout => self.checkout(now, sink)?,
        }
        Ok(())
    }

    /// Advances the panel to `now`.
    pub fn frame(&mut self, now: Duration, sink: &mut dyn NotificationSink) -> HostResult<PanelFrame> {
        let mut bridge = PanelBridge::new(sink, &mut self.collapse_after_checkout);
        let frame = self.panel.tick(now, &mut bridge);
        bridge.finish()?;
        Ok(frame)
    }

    fn request_state(
        &mut self,
        state: CartState,
        now: Duration,
        sink: &mut dyn NotificationSink,
    ) -> HostResult<()> {
        let mut bridge = PanelBridge::new(sink, &mut self.collapse_after_checkout);
        self.panel.request_state(state, now, &mut bridge);
        bridge.finish()
    }

    fn checkout(&mut self, now: Duration, sink: &mut dyn NotificationSink) -> HostResult<()> {
        if self.cart.is_empty() {
            warn!("Checkout with an empty cart ignored");
            return Ok(());
        }

        info!(
            items = self.cart.len(),
            subtotal = %self.cart.subtotal(),
            "Checking out"
        );
        self.cart.clear();
        self.cart_changed(sink)?;

        if self.panel.state() != CartState::Expanded {
            return Ok(());
        }
        if self.panel.is_settling() {
            self.collapse_after_checkout = true;
            Ok(())
        } else {
            self.request_state(CartState::Collapsed, now, sink)
        }
    }

    fn cart_changed(&mut self, sink: &mut dyn NotificationSink) -> HostResult<()> {
        self.panel.set_item_count(self.cart.len());
        sink.notify(HostNotification::CartUpdated {
            item_count: self.cart.len(),
            count_label: self.cart.count_label(),
            subtotal: self.cart.subtotal(),
            glance: self.cart.glance(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
