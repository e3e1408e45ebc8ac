//! Onboarding Wizard Store
//!
//! Three-step data collection flow. Step transitions are pure functions so
//! the clamping rules are testable without a reactive runtime.

use leptos::*;

pub const FIRST_STEP: u8 = 1;
pub const TOTAL_STEPS: u8 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivityStatus {
    Student,
    WorkingProfessional,
    Homemaker,
    Retired,
    #[default]
    Other,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkoutIntensity {
    #[default]
    Low,
    Moderate,
    High,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DietType {
    #[default]
    Vegetarian,
    NonVegetarian,
    SemiVegetarian,
    Vegan,
}

impl DietType {
    pub fn label(self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-vegetarian",
            DietType::SemiVegetarian => "Semi-vegetarian",
            DietType::Vegan => "Vegan",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BudgetRange {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PersonalInfo {
    pub full_name: String,
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity: ActivityStatus,
    pub workout_minutes: u32,
    pub intensity: WorkoutIntensity,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DietaryPreferences {
    pub diet_type: DietType,
    pub allergies: Vec<String>,
    pub cuisines: Vec<String>,
    pub budget: BudgetRange,
    pub meals_per_day: u8,
}

impl Default for DietaryPreferences {
    fn default() -> Self {
        Self {
            diet_type: DietType::default(),
            allergies: Vec::new(),
            cuisines: Vec::new(),
            budget: BudgetRange::default(),
            meals_per_day: 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HealthInfo {
    pub goals: Vec<HealthGoal>,
    pub bedtime: String,
    pub wakeup_time: String,
    pub conditions: Vec<String>,
}

impl Default for HealthInfo {
    fn default() -> Self {
        Self {
            goals: vec![HealthGoal::Maintenance],
            bedtime: "22:00".to_string(),
            wakeup_time: "06:00".to_string(),
            conditions: Vec::new(),
        }
    }
}

/// Advance from `step`. `None` means the wizard just finished.
pub fn next_step(step: u8) -> Option<u8> {
    if step < TOTAL_STEPS {
        Some(step + 1)
    } else {
        None
    }
}

/// Step back from `step`, clamped at the first step.
pub fn previous_step(step: u8) -> u8 {
    step.saturating_sub(1).max(FIRST_STEP)
}

/// Whether a direct jump to `step` is allowed.
pub fn valid_step(step: u8) -> bool {
    (FIRST_STEP..=TOTAL_STEPS).contains(&step)
}

/// Wizard state provided to the onboarding page and its forms.
#[derive(Clone, Copy)]
pub struct OnboardingState {
    pub step: RwSignal<u8>,
    pub personal: RwSignal<PersonalInfo>,
    pub dietary: RwSignal<DietaryPreferences>,
    pub health: RwSignal<HealthInfo>,
}

pub fn provide_onboarding_state() {
    let state = OnboardingState {
        step: create_rw_signal(FIRST_STEP),
        personal: create_rw_signal(PersonalInfo::default()),
        dietary: create_rw_signal(DietaryPreferences::default()),
        health: create_rw_signal(HealthInfo::default()),
    };
    provide_context(state);
}

impl OnboardingState {
    /// Move to the next step. Returns true when the final step was just
    /// submitted and the wizard is complete.
    pub fn advance(&self) -> bool {
        match next_step(self.step.get_untracked()) {
            Some(next) => {
                self.step.set(next);
                false
            }
            None => true,
        }
    }

    pub fn back(&self) {
        self.step.update(|s| *s = previous_step(*s));
    }

    pub fn go_to(&self, step: u8) {
        if valid_step(step) {
            self.step.set(step);
        }
    }

    pub fn reset(&self) {
        self.step.set(FIRST_STEP);
        self.personal.set(PersonalInfo::default());
        self.dietary.set(DietaryPreferences::default());
        self.health.set(HealthInfo::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_step_walks_forward_then_finishes() {
        assert_eq!(next_step(1), Some(2));
        assert_eq!(next_step(2), Some(3));
        assert_eq!(next_step(3), None);
    }

    #[test]
    fn test_previous_step_clamps_at_first() {
        assert_eq!(previous_step(3), 2);
        assert_eq!(previous_step(2), 1);
        assert_eq!(previous_step(1), 1);
    }

    #[test]
    fn test_valid_step_bounds() {
        assert!(!valid_step(0));
        assert!(valid_step(1));
        assert!(valid_step(3));
        assert!(!valid_step(4));
    }

    #[test]
    fn test_dietary_defaults() {
        let prefs = DietaryPreferences::default();
        assert_eq!(prefs.diet_type, DietType::Vegetarian);
        assert_eq!(prefs.meals_per_day, 3);
        assert!(prefs.allergies.is_empty());
    }
}
