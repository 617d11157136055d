// ABOUTME: Nutrition engine configuration for BMR, TDEE, calorie bounds, and macro splits
// ABOUTME: Defaults, NUTRITION_* environment overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Engine Configuration
//!
//! Provides configuration for every stage of the target calculation pipeline:
//! BMR coefficients, activity multipliers, energy-balance constants, per-goal calorie
//! bounds, default macro splits, and meal distribution tables.
//!
//! # Configuration Methods
//!
//! 1. Environment variables (highest priority):
//!    ```bash
//!    export NUTRITION_ENERGY_DENSITY_KCAL_PER_KG=7700
//!    export NUTRITION_ACTIVITY_MODERATE=1.55
//!    ```
//!
//! 2. Default values (if env vars not set)
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010) Exercise Physiology

use super::error::ConfigError;
use pierre_nutrition_core::constants::{body_mass, percent};
use pierre_nutrition_core::models::{ActivityLevel, DietGoal};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Nutrition Engine Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Energy density, planning horizon, and waist heuristic
    pub energy_balance: EnergyBalanceConfig,
    /// Per-goal calorie floors and ceilings
    pub calorie_bounds: CalorieBoundsConfig,
    /// Default macro percentages per diet goal
    pub macro_splits: MacroSplitConfig,
    /// Meal-level distribution defaults
    pub meal_distribution: MealDistributionConfig,
    /// Quick profile-based estimate used when no planner result exists
    pub quick_estimate: QuickEstimateConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Lightly active (1-3 days/week): 1.375
    pub lightly_active: f64,
    /// Moderately active (3-5 days/week): 1.55
    pub moderately_active: f64,
    /// Very active (6-7 days/week): 1.725
    pub very_active: f64,
    /// Extra active (hard training 2x/day): 1.9
    pub extra_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::LightlyActive => self.lightly_active,
            ActivityLevel::ModeratelyActive => self.moderately_active,
            ActivityLevel::VeryActive => self.very_active,
            ActivityLevel::ExtraActive => self.extra_active,
        }
    }
}

/// Energy-balance conversion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyBalanceConfig {
    /// Energy content of one kilogram of body-mass change (kcal/kg)
    pub energy_density_kcal_per_kg: f64,
    /// Days over which a one-month goal is spread
    pub goal_horizon_days: f64,
    /// Estimated body-fat percent lost per centimeter of waist reduction
    pub waist_fat_pct_per_cm: f64,
    /// Waist reduction (cm) above which a one-month goal is flagged unrealistic
    pub waist_warning_threshold_cm: f64,
    /// Minimum margin above BMR for the final target (kcal)
    pub final_bmr_margin_kcal: f64,
}

impl EnergyBalanceConfig {
    /// Daily calorie adjustment for losing `kg` of body mass over the goal horizon
    #[must_use]
    pub fn daily_adjustment_for_kg(&self, kg: f64) -> f64 {
        self.energy_density_kcal_per_kg * kg / self.goal_horizon_days
    }
}

/// Fat-loss bounds: keep a real deficit without undercutting a safe floor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FatLossBounds {
    /// Smallest deficit below TDEE (kcal)
    pub min_deficit_kcal: f64,
    /// Margin above BMR the target may not drop below (kcal)
    pub bmr_margin_kcal: f64,
    /// Absolute floor (kcal)
    pub hard_floor_kcal: f64,
}

/// Muscle-gain bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MuscleGainBounds {
    /// Smallest surplus above TDEE (kcal)
    pub min_surplus_kcal: f64,
}

/// Recomposition bounds: stay near maintenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecompositionBounds {
    /// Largest deficit below TDEE (kcal)
    pub max_deficit_kcal: f64,
    /// Largest surplus above TDEE (kcal)
    pub max_surplus_kcal: f64,
    /// Margin above BMR the target may not drop below (kcal)
    pub bmr_margin_kcal: f64,
    /// Absolute floor (kcal)
    pub hard_floor_kcal: f64,
}

/// Per-goal calorie bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieBoundsConfig {
    /// Fat-loss policy
    pub fat_loss: FatLossBounds,
    /// Muscle-gain policy
    pub muscle_gain: MuscleGainBounds,
    /// Recomposition policy
    pub recomposition: RecompositionBounds,
}

impl CalorieBoundsConfig {
    /// Lowest target a diet goal allows for a given BMR: `max(bmr + margin, hard floor)`.
    ///
    /// Muscle gain has no hard floor; its lower bound is a surplus over TDEE.
    #[must_use]
    pub fn floor_for(&self, goal: DietGoal, bmr: f64) -> Option<f64> {
        match goal {
            DietGoal::FatLoss => Some(
                (bmr + self.fat_loss.bmr_margin_kcal).max(self.fat_loss.hard_floor_kcal),
            ),
            DietGoal::MuscleGain => None,
            DietGoal::Recomposition => Some(
                (bmr + self.recomposition.bmr_margin_kcal)
                    .max(self.recomposition.hard_floor_kcal),
            ),
        }
    }
}

/// Macro distribution (protein%, carbs%, fat%)
///
/// All percentages must sum to 100.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    /// Protein percentage (0-100)
    pub protein_pct: u8,
    /// Carbohydrate percentage (0-100)
    pub carbs_pct: u8,
    /// Fat percentage (0-100)
    pub fat_pct: u8,
}

impl MacroDistribution {
    /// Create a new macro distribution
    ///
    /// # Panics
    ///
    /// Panics in debug mode if percentages don't sum to 100
    #[must_use]
    pub const fn new(protein_pct: u8, carbs_pct: u8, fat_pct: u8) -> Self {
        debug_assert!(
            protein_pct
                .saturating_add(carbs_pct)
                .saturating_add(fat_pct)
                == 100,
            "Macro percentages must sum to 100"
        );
        Self {
            protein_pct,
            carbs_pct,
            fat_pct,
        }
    }

    /// Get as a tuple (protein, carbs, fat)
    #[must_use]
    pub const fn as_tuple(&self) -> (u8, u8, u8) {
        (self.protein_pct, self.carbs_pct, self.fat_pct)
    }

    /// Sum of the three percentages
    #[must_use]
    pub fn total(&self) -> u16 {
        u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct)
    }
}

/// Default macro splits per diet goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Fat loss: 35/35/30
    pub fat_loss: MacroDistribution,
    /// Muscle gain: 30/50/20
    pub muscle_gain: MacroDistribution,
    /// Recomposition: 40/35/25
    pub recomposition: MacroDistribution,
}

impl MacroSplitConfig {
    /// Distribution for a diet goal
    #[must_use]
    pub const fn for_goal(&self, goal: DietGoal) -> MacroDistribution {
        match goal {
            DietGoal::FatLoss => self.fat_loss,
            DietGoal::MuscleGain => self.muscle_gain,
            DietGoal::Recomposition => self.recomposition,
        }
    }

    /// Validate that all macro distributions sum to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` naming the first distribution that does not
    /// sum to exactly 100.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for goal in DietGoal::ALL {
            let sum = self.for_goal(goal).total();
            if sum != 100 {
                return Err(ConfigError::InvalidWeights(format!(
                    "{goal} macro percentages must sum to 100, got {sum}"
                )));
            }
        }
        Ok(())
    }
}

/// One row of the default meal table; the same share applies to every column
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultMealShare {
    /// Meal name
    pub name: String,
    /// Share of the daily total (percent)
    pub share_pct: f64,
}

impl DefaultMealShare {
    fn new(name: &str, share_pct: f64) -> Self {
        Self {
            name: name.to_owned(),
            share_pct,
        }
    }
}

/// Percent deviation bands for meal-level adherence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdherenceBands {
    /// Within this many percent of target counts as on target
    pub on_target_pct: f64,
    /// Within this many percent counts as near; beyond is off target
    pub near_pct: f64,
}

/// Meal-level distribution defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealDistributionConfig {
    /// Allowed deviation from 100 for a percentage column sum
    pub column_tolerance_pct: f64,
    /// Default six-meal table
    pub default_meals: Vec<DefaultMealShare>,
    /// Adherence classification bands
    pub adherence: AdherenceBands,
}

/// Quick estimate used when the caller has no planner or manual result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickEstimateConfig {
    /// Calorie adjustment from TDEE for fat loss (kcal)
    pub fat_loss_adjustment_kcal: f64,
    /// Calorie adjustment from TDEE for muscle gain (kcal)
    pub muscle_gain_adjustment_kcal: f64,
    /// Calorie adjustment from TDEE for recomposition (kcal)
    pub recomposition_adjustment_kcal: f64,
    /// Protein for fat loss (g/kg)
    pub fat_loss_protein_g_per_kg: f64,
    /// Protein for muscle gain (g/kg)
    pub muscle_gain_protein_g_per_kg: f64,
    /// Protein for recomposition (g/kg)
    pub recomposition_protein_g_per_kg: f64,
    /// Share of target calories assigned to fat (percent)
    pub fat_share_pct: f64,
}

impl QuickEstimateConfig {
    /// Calorie adjustment from TDEE for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: DietGoal) -> f64 {
        match goal {
            DietGoal::FatLoss => self.fat_loss_adjustment_kcal,
            DietGoal::MuscleGain => self.muscle_gain_adjustment_kcal,
            DietGoal::Recomposition => self.recomposition_adjustment_kcal,
        }
    }

    /// Protein recommendation for a goal (g/kg)
    #[must_use]
    pub const fn protein_g_per_kg_for(&self, goal: DietGoal) -> f64 {
        match goal {
            DietGoal::FatLoss => self.fat_loss_protein_g_per_kg,
            DietGoal::MuscleGain => self.muscle_gain_protein_g_per_kg,
            DietGoal::Recomposition => self.recomposition_protein_g_per_kg,
        }
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmr.msj_weight_coef <= 0.0 || self.bmr.msj_height_coef <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive",
            ));
        }

        self.validate_activity_factors()?;
        self.validate_energy_balance()?;
        self.macro_splits.validate()?;
        self.validate_meal_distribution()?;

        Ok(())
    }

    fn validate_activity_factors(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        if factors.sedentary < 1.0 || factors.extra_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        let ascending = ActivityLevel::ALL
            .windows(2)
            .all(|pair| factors.factor_for(pair[0]) < factors.factor_for(pair[1]));
        if !ascending {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }
        Ok(())
    }

    fn validate_energy_balance(&self) -> Result<(), ConfigError> {
        let energy = &self.energy_balance;
        if energy.energy_density_kcal_per_kg <= 0.0 || energy.goal_horizon_days <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Energy density and goal horizon must be positive",
            ));
        }
        if energy.waist_fat_pct_per_cm < 0.0 || energy.waist_warning_threshold_cm <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Waist heuristic values must be non-negative",
            ));
        }
        let recomp = &self.calorie_bounds.recomposition;
        if recomp.max_deficit_kcal < 0.0 || recomp.max_surplus_kcal < 0.0 {
            return Err(ConfigError::InvalidRange(
                "Recomposition deficit and surplus caps must be non-negative",
            ));
        }
        Ok(())
    }

    fn validate_meal_distribution(&self) -> Result<(), ConfigError> {
        let meals = &self.meal_distribution;
        if meals.default_meals.is_empty() {
            return Err(ConfigError::InvalidRange(
                "Default meal table must contain at least one meal",
            ));
        }
        let sum: f64 = meals.default_meals.iter().map(|m| m.share_pct).sum();
        if (sum - percent::WHOLE).abs() > meals.column_tolerance_pct {
            return Err(ConfigError::InvalidWeights(format!(
                "default meal shares must sum to 100, got {sum}"
            )));
        }
        if meals.adherence.on_target_pct <= 0.0
            || meals.adherence.on_target_pct >= meals.adherence.near_pct
        {
            return Err(ConfigError::InvalidRange(
                "Adherence bands must satisfy 0 < on_target < near",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Energy balance overrides
        Self::apply_env_var(
            "NUTRITION_ENERGY_DENSITY_KCAL_PER_KG",
            &mut self.energy_balance.energy_density_kcal_per_kg,
        )?;
        Self::apply_env_var(
            "NUTRITION_GOAL_HORIZON_DAYS",
            &mut self.energy_balance.goal_horizon_days,
        )?;
        Self::apply_env_var(
            "NUTRITION_WAIST_WARNING_CM",
            &mut self.energy_balance.waist_warning_threshold_cm,
        )?;
        Self::apply_env_var(
            "NUTRITION_FINAL_BMR_MARGIN_KCAL",
            &mut self.energy_balance.final_bmr_margin_kcal,
        )?;

        // Activity factor overrides
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_SEDENTARY",
            &mut self.activity_factors.sedentary,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_LIGHT",
            &mut self.activity_factors.lightly_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_MODERATE",
            &mut self.activity_factors.moderately_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_ACTIVE",
            &mut self.activity_factors.very_active,
        )?;
        Self::apply_env_var(
            "NUTRITION_ACTIVITY_EXTRA_ACTIVE",
            &mut self.activity_factors.extra_active,
        )?;

        // Calorie floor overrides
        Self::apply_env_var(
            "NUTRITION_FAT_LOSS_FLOOR_KCAL",
            &mut self.calorie_bounds.fat_loss.hard_floor_kcal,
        )?;
        Self::apply_env_var(
            "NUTRITION_RECOMP_FLOOR_KCAL",
            &mut self.calorie_bounds.recomposition.hard_floor_kcal,
        )?;

        // Meal distribution overrides
        Self::apply_env_var(
            "NUTRITION_MEAL_COLUMN_TOLERANCE",
            &mut self.meal_distribution.column_tolerance_pct,
        )?;

        Ok(self)
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            lightly_active: 1.375,
            moderately_active: 1.55,
            very_active: 1.725,
            extra_active: 1.9,
        }
    }
}

impl Default for EnergyBalanceConfig {
    fn default() -> Self {
        Self {
            energy_density_kcal_per_kg: body_mass::ENERGY_DENSITY_KCAL_PER_KG,
            goal_horizon_days: body_mass::GOAL_HORIZON_DAYS,
            // Roughly 0.5% body fat per cm of waist; a coarse heuristic
            waist_fat_pct_per_cm: 0.5,
            waist_warning_threshold_cm: 5.0,
            final_bmr_margin_kcal: 100.0,
        }
    }
}

impl Default for CalorieBoundsConfig {
    fn default() -> Self {
        Self {
            fat_loss: FatLossBounds {
                min_deficit_kcal: 200.0,
                bmr_margin_kcal: 200.0,
                hard_floor_kcal: 1200.0,
            },
            muscle_gain: MuscleGainBounds {
                min_surplus_kcal: 150.0,
            },
            recomposition: RecompositionBounds {
                max_deficit_kcal: 300.0,
                max_surplus_kcal: 100.0,
                bmr_margin_kcal: 100.0,
                hard_floor_kcal: 1400.0,
            },
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            fat_loss: MacroDistribution::new(35, 35, 30),
            muscle_gain: MacroDistribution::new(30, 50, 20),
            recomposition: MacroDistribution::new(40, 35, 25),
        }
    }
}

impl Default for MealDistributionConfig {
    fn default() -> Self {
        Self {
            column_tolerance_pct: 0.5,
            default_meals: vec![
                DefaultMealShare::new("Breakfast", 22.5),
                DefaultMealShare::new("Morning Snack", 10.0),
                DefaultMealShare::new("Lunch", 22.5),
                DefaultMealShare::new("Afternoon Snack", 10.0),
                DefaultMealShare::new("Dinner", 20.0),
                DefaultMealShare::new("Evening Snack", 15.0),
            ],
            adherence: AdherenceBands {
                on_target_pct: 5.0,
                near_pct: 10.0,
            },
        }
    }
}

impl Default for QuickEstimateConfig {
    fn default() -> Self {
        Self {
            fat_loss_adjustment_kcal: -500.0,
            muscle_gain_adjustment_kcal: 300.0,
            recomposition_adjustment_kcal: 0.0,
            fat_loss_protein_g_per_kg: 1.8,
            muscle_gain_protein_g_per_kg: 2.0,
            recomposition_protein_g_per_kg: 1.6,
            fat_share_pct: 25.0,
        }
    }
}
