//! Built-in Warsaw weekend trip used as the default and reset target

use super::model::{DaySchedule, Itinerary, ItineraryItem, TripMeta};

/// Default data a store starts from and returns to on reset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub itinerary: Itinerary,
    pub meta: TripMeta,
}

impl Seed {
    pub fn new(itinerary: Itinerary, meta: TripMeta) -> Self {
        Self { itinerary, meta }
    }

    /// The Warsaw-by-car weekend
    pub fn warsaw() -> Self {
        Self {
            itinerary: warsaw_itinerary(),
            meta: TripMeta::new("Warsaw Weekend", "Friday 15:20 — Sunday 16:00"),
        }
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::warsaw()
    }
}

fn warsaw_itinerary() -> Itinerary {
    vec![
        DaySchedule::new(
            "Friday",
            "Arrival & Old Town",
            vec![
                ItineraryItem::new(
                    "fri-land",
                    "15:20",
                    "Land at Chopin Airport",
                    "Pick up rental car. Prepare for rush hour traffic.",
                    "Warsaw Chopin Airport Arrivals",
                ),
                ItineraryItem::new(
                    "fri-checkin",
                    "16:30",
                    "Hotel Check-in",
                    "Drop off bags. Park the car (street parking is paid until 20:00).",
                    "Warsaw City Center",
                ),
                ItineraryItem::new(
                    "fri-walk",
                    "17:30",
                    "Old Town Walk",
                    "Park near Old Town. Walk Castle Square, Market Square & Barbican.",
                    "Plac Zamkowy, Warszawa",
                ),
                ItineraryItem::new(
                    "fri-dinner",
                    "19:30",
                    "Dinner: Stary Dom or U Fukiera",
                    "Traditional Polish cuisine. Remember: 0.0 alcohol tolerance for drivers.",
                    "Restauracja Stary Dom, Warszawa",
                ),
            ],
        ),
        DaySchedule::new(
            "Saturday",
            "Palaces & History",
            vec![
                ItineraryItem::new(
                    "sat-wilanow",
                    "09:30",
                    "Wilanów Palace",
                    "The \"Polish Versailles\". Easy driving & parking south of city.",
                    "Museum of King Jan III's Palace at Wilanów",
                ),
                ItineraryItem::new(
                    "sat-lunch",
                    "12:30",
                    "Lunch at Hala Koszyki",
                    "Trendy food hall in a restored industrial building.",
                    "Hala Koszyki, Warszawa",
                ),
                ItineraryItem::new(
                    "sat-museum",
                    "14:30",
                    "Warsaw Uprising Museum",
                    "Immersive history of 1944. A must-see.",
                    "Warsaw Uprising Museum",
                ),
                ItineraryItem::new(
                    "sat-view",
                    "17:00",
                    "Palace of Culture & Science",
                    "Iconic Stalinist tower. View from the 30th floor.",
                    "Palace of Culture and Science, Warsaw",
                ),
                ItineraryItem::new(
                    "sat-dinner",
                    "20:00",
                    "Dinner in Praga District",
                    "Try \"Pyzy Flaki Gorące\" for jarred street food.",
                    "Ząbkowska, Warszawa",
                ),
            ],
        ),
        DaySchedule::new(
            "Sunday",
            "Royalty & Departure",
            vec![
                ItineraryItem::new(
                    "sun-park",
                    "09:30",
                    "Łazienki Królewskie Park",
                    "Peaceful Sunday walk. See the Palace on the Isle.",
                    "Łazienki Królewskie, Warszawa",
                ),
                ItineraryItem::new(
                    "sun-lunch",
                    "12:00",
                    "Farewell Lunch: Różana",
                    "Elegant Polish dining with a garden. Near the park.",
                    "Restauracja Różana, Warszawa",
                ),
                ItineraryItem::new(
                    "sun-airport",
                    "14:00",
                    "Drive to Airport",
                    "Refuel car and return rental. Flight check-in.",
                    "Warsaw Chopin Airport Departures",
                ),
            ],
        ),
    ]
}
