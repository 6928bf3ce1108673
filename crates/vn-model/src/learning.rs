//! Reinforcement-learning configuration record.
//!
//! The engine stores this record and returns it verbatim through the
//! get/patch interface; nothing in the tick loop ever reads it.  That
//! decoupling is deliberate and preserved — any adaptive behaviour driven by
//! these parameters belongs to a future scope.

/// Q-learning parameter block attached to every simulation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LearningConfig {
    /// In [0, 1]; patchable.
    pub learning_rate:      f64,
    pub discount_factor:    f64,
    /// In [0, 1]; patchable.
    pub exploration_rate:   f64,
    pub state_space:        Vec<String>,
    pub action_space:       Vec<String>,
    pub reward_function:    String,
    pub convergence_metric: f64,
}

impl Default for LearningConfig {
    /// The defaults every new simulation starts with.
    fn default() -> Self {
        Self {
            learning_rate:      0.1,
            discount_factor:    0.9,
            exploration_rate:   0.2,
            state_space:        ["vehicleDensity", "linkLoss", "centrality"]
                .map(String::from)
                .to_vec(),
            action_space:       ["joinGroup", "leaveGroup", "formGroup", "chooseNextHop"]
                .map(String::from)
                .to_vec(),
            reward_function:    "combinedMetric".to_owned(),
            convergence_metric: 0.85,
        }
    }
}
