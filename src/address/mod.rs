mod cardinals;
mod ordinals;

pub use cardinals::normalize;
pub use ordinals::fold_ordinals;
