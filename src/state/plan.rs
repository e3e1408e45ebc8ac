//! Diet Plan Store
//!
//! Weekly meal plan and progress history. Plan contents are mock data from
//! an opaque generator; the only real computation here is summing macro
//! nutrients per day. Randomness is injected so generation is deterministic
//! under test.

use chrono::{Duration, NaiveDate, Utc};
use leptos::*;

use crate::state::onboarding::DietType;

/// Source of uniform randoms in [0, 1).
pub type Rng<'a> = &'a mut dyn FnMut() -> f64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    MorningSnack,
    Lunch,
    EveningSnack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 5] = [
        MealSlot::Breakfast,
        MealSlot::MorningSnack,
        MealSlot::Lunch,
        MealSlot::EveningSnack,
        MealSlot::Dinner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::MorningSnack => "Morning Snack",
            MealSlot::Lunch => "Lunch",
            MealSlot::EveningSnack => "Evening Snack",
            MealSlot::Dinner => "Dinner",
        }
    }

    fn mock_name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Healthy Breakfast Bowl",
            MealSlot::MorningSnack => "Healthy Morning Snack",
            MealSlot::Lunch => "Nutritious Lunch Plate",
            MealSlot::EveningSnack => "Energizing Evening Snack",
            MealSlot::Dinner => "Balanced Dinner Meal",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub description: String,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub ingredients: Vec<String>,
    pub preparation_minutes: u32,
    pub diet_type: DietType,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NutritionTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

impl NutritionTotals {
    pub fn from_meals<'a>(meals: impl Iterator<Item = &'a Meal>) -> Self {
        meals.fold(Self::default(), |acc, m| Self {
            calories: acc.calories + m.calories,
            protein: acc.protein + m.protein,
            carbs: acc.carbs + m.carbs,
            fats: acc.fats + m.fats,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub meals: Vec<(MealSlot, Meal)>,
    pub totals: NutritionTotals,
}

impl DailyPlan {
    pub fn meal(&self, slot: MealSlot) -> Option<&Meal> {
        self.meals.iter().find(|(s, _)| *s == slot).map(|(_, m)| m)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyPlan {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days: Vec<DailyPlan>,
    /// Projected weight change in kg over the projected timeline.
    pub projected_weight_change: f64,
    pub projected_weeks: u32,
}

/// One sample of the mocked progress history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressEntry {
    pub date: NaiveDate,
    pub weight: f64,
    pub calories: f64,
    pub adherence: f64,
}

fn rand_range(rng: Rng, lo: u32, span: u32) -> u32 {
    lo + (rng() * span as f64) as u32
}

/// Build one mock meal for a slot.
pub fn mock_meal(id: String, slot: MealSlot, diet_type: DietType, rng: Rng) -> Meal {
    Meal {
        id,
        name: slot.mock_name().to_string(),
        description: "A delicious and nutritious meal that provides balanced nutrition."
            .to_string(),
        calories: rand_range(rng, 200, 400),
        protein: rand_range(rng, 10, 30),
        carbs: rand_range(rng, 20, 40),
        fats: rand_range(rng, 5, 20),
        ingredients: (1..=4).map(|i| format!("Ingredient {}", i)).collect(),
        preparation_minutes: rand_range(rng, 10, 30),
        diet_type,
    }
}

/// Build one mock day: five meal slots plus summed totals.
pub fn mock_daily_plan(date: NaiveDate, day_index: usize, diet_type: DietType, rng: Rng) -> DailyPlan {
    let meals: Vec<(MealSlot, Meal)> = MealSlot::ALL
        .iter()
        .enumerate()
        .map(|(i, &slot)| {
            let id = format!("{}{}", day_index + 1, i + 1);
            (slot, mock_meal(id, slot, diet_type, rng))
        })
        .collect();

    let totals = NutritionTotals::from_meals(meals.iter().map(|(_, m)| m));

    DailyPlan { date, meals, totals }
}

/// Build a full mock week starting at `start`.
pub fn mock_weekly_plan(start: NaiveDate, diet_type: DietType, rng: Rng) -> WeeklyPlan {
    let days: Vec<DailyPlan> = (0..7)
        .map(|i| mock_daily_plan(start + Duration::days(i as i64), i, diet_type, rng))
        .collect();

    WeeklyPlan {
        id: format!("plan-{:08x}", (rng() * u32::MAX as f64) as u32),
        start_date: start,
        end_date: start + Duration::days(6),
        days,
        projected_weight_change: -0.5,
        projected_weeks: 10,
    }
}

/// Build the 30-day mock progress history ending at `today`.
pub fn mock_progress(today: NaiveDate, rng: Rng) -> Vec<ProgressEntry> {
    let start = today - Duration::days(30);
    (0..30)
        .map(|i| ProgressEntry {
            date: start + Duration::days(i as i64),
            weight: 75.0 - (i as f64 * 0.05),
            calories: 1800.0 + (rng() * 200.0).floor(),
            adherence: 70.0 + (rng() * 30.0).floor(),
        })
        .collect()
}

fn js_random() -> f64 {
    js_sys::Math::random()
}

/// Plan state provided to the dashboard.
#[derive(Clone, Copy)]
pub struct PlanState {
    pub plan: RwSignal<Option<WeeklyPlan>>,
    pub progress: RwSignal<Vec<ProgressEntry>>,
    pub generating: RwSignal<bool>,
}

pub fn provide_plan_state() {
    let state = PlanState {
        plan: create_rw_signal(None),
        progress: create_rw_signal(Vec::new()),
        generating: create_rw_signal(false),
    };
    provide_context(state);
}

impl PlanState {
    /// Generate a fresh weekly plan and progress history (simulated delay).
    pub async fn generate(&self, diet_type: DietType) {
        self.generating.set(true);
        gloo_timers::future::TimeoutFuture::new(1500).await;

        let today = Utc::now().date_naive();
        let mut rng = js_random;
        self.plan.set(Some(mock_weekly_plan(today, diet_type, &mut rng)));
        self.progress.set(mock_progress(today, &mut rng));

        self.generating.set(false);
    }

    /// Regenerate the current week in place, keeping its dates.
    pub async fn regenerate(&self, diet_type: DietType) {
        let Some(current) = self.plan.get_untracked() else {
            return;
        };

        self.generating.set(true);
        gloo_timers::future::TimeoutFuture::new(1000).await;

        let mut rng = js_random;
        let days: Vec<DailyPlan> = current
            .days
            .iter()
            .enumerate()
            .map(|(i, day)| mock_daily_plan(day.date, i, diet_type, &mut rng))
            .collect();

        self.plan.set(Some(WeeklyPlan {
            id: format!("plan-{:08x}", (rng() * u32::MAX as f64) as u32),
            days,
            ..current
        }));
        self.generating.set(false);
    }

    /// Replace one meal slot on one day and recompute that day's totals.
    pub fn swap_meal(&self, day_index: usize, slot: MealSlot, diet_type: DietType) {
        let mut rng = js_random;
        self.plan.update(|plan| {
            let Some(plan) = plan else { return };
            let Some(day) = plan.days.get_mut(day_index) else {
                return;
            };
            swap_meal_in_day(day, slot, diet_type, &mut rng);
        });
    }
}

/// Pure meal-swap transition: replace `slot` and re-sum the day's totals.
pub fn swap_meal_in_day(day: &mut DailyPlan, slot: MealSlot, diet_type: DietType, rng: Rng) {
    let replacement_id = format!("swap-{:04x}", (rng() * u16::MAX as f64) as u16);
    if let Some(entry) = day.meals.iter_mut().find(|(s, _)| *s == slot) {
        let mut meal = mock_meal(replacement_id, slot, diet_type, rng);
        meal.name = format!("Alternative {}", slot.label());
        entry.1 = meal;
    }
    day.totals = NutritionTotals::from_meals(day.meals.iter().map(|(_, m)| m));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_daily_totals_are_sums() {
        let mut rng = fixed(0.5);
        let day = mock_daily_plan(date("2026-08-29"), 0, DietType::Vegan, &mut rng);

        assert_eq!(day.meals.len(), 5);
        let expected = NutritionTotals::from_meals(day.meals.iter().map(|(_, m)| m));
        assert_eq!(day.totals, expected);
        assert_eq!(
            day.totals.calories,
            day.meals.iter().map(|(_, m)| m.calories).sum::<u32>()
        );
    }

    #[test]
    fn test_weekly_plan_covers_seven_ascending_days() {
        let mut rng = fixed(0.0);
        let plan = mock_weekly_plan(date("2026-08-01"), DietType::Vegetarian, &mut rng);

        assert_eq!(plan.days.len(), 7);
        assert_eq!(plan.start_date, date("2026-08-01"));
        assert_eq!(plan.end_date, date("2026-08-07"));
        for pair in plan.days.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_meal_values_stay_in_mock_bounds() {
        let mut low = fixed(0.0);
        let meal = mock_meal("1".into(), MealSlot::Lunch, DietType::Vegan, &mut low);
        assert_eq!(meal.calories, 200);
        assert_eq!(meal.protein, 10);

        let mut high = fixed(0.999);
        let meal = mock_meal("2".into(), MealSlot::Lunch, DietType::Vegan, &mut high);
        assert!(meal.calories < 600);
        assert!(meal.protein < 40);
    }

    #[test]
    fn test_progress_is_thirty_days_ascending() {
        let mut rng = fixed(0.25);
        let progress = mock_progress(date("2026-08-29"), &mut rng);

        assert_eq!(progress.len(), 30);
        for pair in progress.windows(2) {
            assert!(pair[0].date < pair[1].date);
            // Weight trends downward in the mock.
            assert!(pair[0].weight > pair[1].weight);
        }
        assert!(progress.iter().all(|p| (70.0..=100.0).contains(&p.adherence)));
    }

    #[test]
    fn test_swap_meal_recomputes_totals() {
        let mut rng = fixed(0.9);
        let mut day = mock_daily_plan(date("2026-08-29"), 0, DietType::Vegetarian, &mut rng);
        let before = day.totals;

        let mut swap_rng = fixed(0.1);
        swap_meal_in_day(&mut day, MealSlot::Dinner, DietType::Vegetarian, &mut swap_rng);

        let dinner = day.meal(MealSlot::Dinner).unwrap();
        assert_eq!(dinner.name, "Alternative Dinner");
        assert_ne!(day.totals, before);
        assert_eq!(
            day.totals,
            NutritionTotals::from_meals(day.meals.iter().map(|(_, m)| m))
        );
    }

    #[test]
    fn test_swap_unknown_day_slot_is_noop_on_meals() {
        let mut rng = fixed(0.5);
        let mut day = mock_daily_plan(date("2026-08-29"), 0, DietType::Vegan, &mut rng);
        let names: Vec<String> = day.meals.iter().map(|(_, m)| m.name.clone()).collect();

        // Slot always exists in the mock; totals stay consistent regardless.
        let mut swap_rng = fixed(0.5);
        swap_meal_in_day(&mut day, MealSlot::Breakfast, DietType::Vegan, &mut swap_rng);
        assert_ne!(
            names,
            day.meals.iter().map(|(_, m)| m.name.clone()).collect::<Vec<_>>()
        );
    }
}
