pub(crate) mod health;
pub(crate) mod recommendations;
pub(crate) mod risk;
