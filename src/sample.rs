// src/sample.rs
//! The miniature noun taxonomy bundled for the demo binaries.
//!
//! Shaped like the WordNet noun hierarchy: a single `entity.n.01` root
//! with `physical_entity.n.01` and `abstraction.n.06` directly beneath
//! it, and enough of the lower hierarchy to score the demonstration
//! vocabulary, ambiguous words included.

use crate::core::taxonomy::Taxonomy;

pub fn sample_taxonomy() -> Taxonomy {
    let mut t = Taxonomy::new();

    let entity = t.add_sense("entity.n.01", &[]);
    let physical = t.add_sense("physical_entity.n.01", &[entity]);
    let abstraction = t.add_sense("abstraction.n.06", &[entity]);

    // Concrete side: organisms.
    let object = t.add_sense("object.n.01", &[physical]);
    let whole = t.add_sense("whole.n.02", &[object]);
    let living_thing = t.add_sense("living_thing.n.01", &[whole]);
    let organism = t.add_sense("organism.n.01", &[living_thing]);
    let animal = t.add_sense("animal.n.01", &[organism]);
    let carnivore = t.add_sense("carnivore.n.01", &[animal]);
    let canine = t.add_sense("canine.n.02", &[carnivore]);
    let dog = t.add_sense("dog.n.01", &[canine]);
    let feline = t.add_sense("feline.n.01", &[carnivore]);
    let cat = t.add_sense("cat.n.01", &[feline]);

    // person.n.01 keeps its real double parentage, so its ancestry
    // reaches physical_entity.n.01 along two paths.
    let causal_agent = t.add_sense("causal_agent.n.01", &[physical]);
    let person = t.add_sense("person.n.01", &[organism, causal_agent]);

    // Concrete side: food and artifacts.
    let matter = t.add_sense("matter.n.03", &[physical]);
    let solid = t.add_sense("solid.n.01", &[matter]);
    let food = t.add_sense("food.n.02", &[solid]);
    let baked_goods = t.add_sense("baked_goods.n.01", &[food]);
    let cake = t.add_sense("cake.n.03", &[baked_goods]);

    let artifact = t.add_sense("artifact.n.01", &[whole]);
    let instrumentality = t.add_sense("instrumentality.n.03", &[artifact]);
    let device = t.add_sense("device.n.01", &[instrumentality]);
    let elastic_device = t.add_sense("elastic_device.n.01", &[device]);
    let spring_coil = t.add_sense("spring.n.02", &[elastic_device]);
    let conductor = t.add_sense("conductor.n.04", &[device]);
    let line_cord = t.add_sense("line.n.18", &[conductor]);

    // Concrete side: terrain.
    let geological_formation = t.add_sense("geological_formation.n.01", &[object]);
    let spring_water = t.add_sense("spring.n.03", &[geological_formation]);
    let natural_elevation = t.add_sense("natural_elevation.n.01", &[geological_formation]);
    let mountain_peak = t.add_sense("mountain.n.01", &[natural_elevation]);

    // Abstract side: attributes and states.
    let attribute = t.add_sense("attribute.n.02", &[abstraction]);
    let state = t.add_sense("state.n.02", &[attribute]);
    let peace = t.add_sense("peace.n.01", &[state]);
    let freedom = t.add_sense("freedom.n.01", &[state]);
    let quality = t.add_sense("quality.n.01", &[attribute]);
    let virtue = t.add_sense("virtue.n.01", &[quality]);
    let justice = t.add_sense("justice.n.01", &[virtue]);
    let shape = t.add_sense("shape.n.02", &[attribute]);
    let line_shape = t.add_sense("line.n.04", &[shape]);

    // Abstract side: measures.
    let measure = t.add_sense("measure.n.02", &[abstraction]);
    let fundamental_quantity = t.add_sense("fundamental_quantity.n.01", &[measure]);
    let time_period = t.add_sense("time_period.n.01", &[fundamental_quantity]);
    let season = t.add_sense("season.n.02", &[time_period]);
    let spring_season = t.add_sense("spring.n.01", &[season]);
    let indefinite_quantity = t.add_sense("indefinite_quantity.n.01", &[measure]);
    let large_quantity = t.add_sense("large_indefinite_quantity.n.01", &[indefinite_quantity]);
    let mountain_heap = t.add_sense("mountain.n.02", &[large_quantity]);

    t.add_lemma("dog", dog);
    t.add_lemma("cat", cat);
    t.add_lemma("cake", cake);
    t.add_lemma("person", person);
    t.add_lemma("spring", spring_season);
    t.add_lemma("spring", spring_coil);
    t.add_lemma("spring", spring_water);
    t.add_lemma("mountain", mountain_peak);
    t.add_lemma("mountain", mountain_heap);
    t.add_lemma("line", line_shape);
    t.add_lemma("line", line_cord);
    t.add_lemma("peace", peace);
    t.add_lemma("justice", justice);
    t.add_lemma("freedom", freedom);

    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::estimator::AbstractnessEstimator;

    #[test]
    fn demo_vocabulary_ranks_sanely() {
        let estimator = AbstractnessEstimator::new(sample_taxonomy());

        for word in ["dog", "cat", "cake"] {
            assert_eq!(estimator.estimate(word), 0.0, "{}", word);
        }
        for word in ["peace", "justice", "freedom"] {
            assert_eq!(estimator.estimate(word), 1.0, "{}", word);
        }
        for word in ["spring", "mountain", "line"] {
            let score = estimator.estimate(word);
            assert!(score > 0.0 && score < 1.0, "{} scored {}", word, score);
        }
    }

    #[test]
    fn ambiguous_words_average_their_senses() {
        let estimator = AbstractnessEstimator::new(sample_taxonomy());
        // One abstract season sense against a coil and a water source.
        assert!((estimator.estimate("spring") - 1.0 / 3.0).abs() < 1e-12);
        // Peak and heap senses split evenly.
        assert_eq!(estimator.estimate("mountain"), 0.5);
    }

    #[test]
    fn double_parentage_stays_concrete() {
        let estimator = AbstractnessEstimator::new(sample_taxonomy());
        // Both of person.n.01's paths end under physical_entity.n.01.
        assert_eq!(estimator.estimate("person"), 0.0);
    }
}
