use serde::{Deserialize, Serialize};
use sheetnest::io::ext_repr::{ExtNestInstance, ExtNestSolution};

use crate::config::NestConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct NestOutput {
    #[serde(flatten)]
    pub instance: ExtNestInstance,
    pub solution: ExtNestSolution,
    pub config: NestConfig,
}
