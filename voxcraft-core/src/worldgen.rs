use crate::block::BlockKind;
use crate::coordinates::BlockCoord;
use crate::store::BlockStore;

pub const DEFAULT_RADIUS: i32 = 8;

/// Fixed trunk bases, one cell above the ground layer so each tree rests on
/// the grass.
const TREE_SITES: [BlockCoord; 2] = [BlockCoord::new(2, 1, 2), BlockCoord::new(-3, 1, -1)];

const TRUNK_HEIGHT: i32 = 4;

/// Populates `store` with a flat base of side `2 * radius` centered on the
/// origin: Stone two rows below ground, Dirt at ground level. Tree sites are
/// planted only when they fall inside that footprint, so small radii produce
/// a base-only world. Deterministic; `radius <= 0` yields an empty base.
pub fn generate(store: &mut BlockStore, radius: i32) {
    for x in -radius..radius {
        for z in -radius..radius {
            store.add(BlockCoord::new(x, -2, z), BlockKind::Stone);
            store.add(BlockCoord::new(x, -1, z), BlockKind::Stone);
            store.add(BlockCoord::new(x, 0, z), BlockKind::Dirt);
        }
    }

    let footprint = -radius..radius;
    for site in TREE_SITES {
        if footprint.contains(&site.x) && footprint.contains(&site.z) {
            plant_tree(store, site);
        }
    }

    log::debug!("generated {} blocks at radius {radius}", store.len());
}

/// Plants a leaf canopy and a 4-block trunk at `base`. The widest canopy
/// layers omit their corner cells and the top layer keeps only the central
/// 3x3, tapering the silhouette. The trunk goes in last so it owns the one
/// cell where trunk and canopy overlap.
pub fn plant_tree(store: &mut BlockStore, base: BlockCoord) {
    for dy in 3..6 {
        for dx in -2i32..=2 {
            for dz in -2i32..=2 {
                if dx.abs() == 2 && dz.abs() == 2 {
                    continue;
                }
                if dy == 5 && (dx.abs() > 1 || dz.abs() > 1) {
                    continue;
                }
                store.add(base.offset(dx, dy, dz), BlockKind::Leaves);
            }
        }
    }

    for dy in 0..TRUNK_HEIGHT {
        store.add(base.offset(0, dy, 0), BlockKind::Wood);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_count(store: &BlockStore, kind: BlockKind) -> usize {
        store.all().filter(|b| b.kind == kind).count()
    }

    fn sorted_blocks(store: &BlockStore) -> Vec<(BlockCoord, BlockKind)> {
        let mut blocks: Vec<_> = store.all().map(|b| (b.coord, b.kind)).collect();
        blocks.sort_by_key(|(c, _)| (c.x, c.y, c.z));
        blocks
    }

    #[test]
    fn generation_is_deterministic() {
        let mut first = BlockStore::new();
        let mut second = BlockStore::new();
        generate(&mut first, 2);
        generate(&mut second, 2);

        assert_eq!(sorted_blocks(&first), sorted_blocks(&second));
    }

    #[test]
    fn radius_one_world_is_base_only() {
        let mut store = BlockStore::new();
        generate(&mut store, 1);

        // 2x2 footprint, three layers per column.
        assert_eq!(store.len(), 12);
        assert!(store.all().all(|b| (-2..=0).contains(&b.coord.y)));
        assert_eq!(kind_count(&store, BlockKind::Stone), 8);
        assert_eq!(kind_count(&store, BlockKind::Dirt), 4);
        assert_eq!(kind_count(&store, BlockKind::Wood), 0);
    }

    #[test]
    fn non_positive_radius_yields_an_empty_world() {
        let mut store = BlockStore::new();
        generate(&mut store, 0);
        assert!(store.is_empty());

        generate(&mut store, -3);
        assert!(store.is_empty());
    }

    #[test]
    fn default_radius_places_both_trees() {
        let mut store = BlockStore::new();
        generate(&mut store, DEFAULT_RADIUS);

        for site in TREE_SITES {
            for dy in 0..TRUNK_HEIGHT {
                assert_eq!(store.get(site.offset(0, dy, 0)), Some(BlockKind::Wood));
            }
        }

        assert_eq!(kind_count(&store, BlockKind::Stone), 16 * 16 * 2);
        assert_eq!(kind_count(&store, BlockKind::Dirt), 16 * 16);
        assert_eq!(kind_count(&store, BlockKind::Wood), 2 * 4);
        assert_eq!(kind_count(&store, BlockKind::Leaves), 2 * 50);
    }

    #[test]
    fn tree_sites_outside_the_footprint_are_skipped() {
        let mut store = BlockStore::new();
        generate(&mut store, 2);

        assert_eq!(kind_count(&store, BlockKind::Wood), 0);
        assert_eq!(kind_count(&store, BlockKind::Leaves), 0);
    }

    #[test]
    fn canopy_omits_corners_and_narrows_at_the_top() {
        let mut store = BlockStore::new();
        let base = BlockCoord::new(0, 1, 0);
        plant_tree(&mut store, base);

        // Corner cells of the wide layers are never filled.
        assert_eq!(store.get(base.offset(2, 3, 2)), None);
        assert_eq!(store.get(base.offset(-2, 4, -2)), None);
        // The top layer keeps only the central region.
        assert_eq!(store.get(base.offset(2, 5, 0)), None);
        assert_eq!(store.get(base.offset(0, 5, 2)), None);
        assert_eq!(store.get(base.offset(1, 5, 1)), Some(BlockKind::Leaves));
        // Wide layers reach out to the edges away from the corners.
        assert_eq!(store.get(base.offset(2, 3, 0)), Some(BlockKind::Leaves));
    }

    #[test]
    fn trunk_survives_the_canopy_overlap() {
        let mut store = BlockStore::new();
        let base = BlockCoord::new(0, 1, 0);
        plant_tree(&mut store, base);

        // The canopy's bottom layer covers the trunk's top cell; last write
        // must leave it Wood.
        assert_eq!(store.get(base.offset(0, 3, 0)), Some(BlockKind::Wood));
        assert_eq!(kind_count(&store, BlockKind::Wood), 4);
        assert_eq!(kind_count(&store, BlockKind::Leaves), 50);
    }
}
