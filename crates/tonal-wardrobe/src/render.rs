//! Rendering seam for swatch output.
//!
//! Raster rendering lives outside this crate. The synthesizer only hands
//! an ordered color triple and a name across this boundary and receives
//! an opaque handle back.

use crate::synth::Combination;

/// External collaborator that turns a combination into a swatch strip:
/// one equal-width swatch per color, left to right in the triple's
/// order. The handle's encoding is the renderer's business.
pub trait SwatchRenderer {
    /// Opaque handle to the rendered output.
    type Handle;

    /// Renders one combination under the given name.
    fn render(&mut self, colors: &[String; 3], name: &str) -> Self::Handle;
}

/// Renders all five combinations in synthesis order.
pub fn render_all<R: SwatchRenderer>(
    renderer: &mut R,
    combos: &[Combination; 5],
) -> Vec<R::Handle> {
    combos
        .iter()
        .map(|combo| renderer.render(&combo.colors, combo.kind.name()))
        .collect()
}
