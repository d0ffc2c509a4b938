//! End-to-end checks of the load-resolve-traverse-interpolate pipeline through the public
//! API, the way a file-format parser and a per-voxel compute pass would drive it.

use voxel_lattice::prelude::*;

use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng};

/// Enumerates voxels 0..n as the store contents, like the fixtures in the unit tests.
fn enumerated_dataset(shape: Point3i) -> VolumeDataset {
    let grid = RegularGrid3::new(shape);
    let values: Vec<i32> = (0..grid.num_voxels() as i32).collect();

    VolumeDataset::new(grid, ErasedStore::from(ValueStore::from_vec(values))).unwrap()
}

struct CollectIndices;

impl DatasetVisitor for CollectIndices {
    type Output = Vec<usize>;

    fn visit<E: Element>(self, access: DataAccess<'_, E>) -> Vec<usize> {
        access.voxels().map(|(i, _)| i).collect()
    }
}

#[test]
fn full_volume_iteration_is_linear_and_complete() {
    let dataset = enumerated_dataset(Point3i::new(3, 4, 5));

    let indices = dataset.visit(CollectIndices);
    assert_eq!(indices, (0..60).collect::<Vec<_>>());
}

#[test]
fn index_map_round_trips_every_voxel() {
    let grid = RegularGrid3::new(Point3i::new(5, 7, 3));
    let map = grid.index_map();

    for i in 0..grid.num_voxels() {
        let p = map.coords(i);
        assert!(grid.contains(p));
        assert_eq!(map.index(p), i);
    }
}

struct SliceIndices(SliceDir, usize);

impl DatasetVisitor for SliceIndices {
    type Output = Vec<usize>;

    fn visit<E: Element>(self, access: DataAccess<'_, E>) -> Vec<usize> {
        access
            .slice(self.0, self.1)
            .unwrap()
            .map(|(i, _)| i)
            .collect()
    }
}

#[test]
fn xy_slice_of_a_3x4x3_grid() {
    let dataset = enumerated_dataset(Point3i::new(3, 4, 3));

    let indices = dataset.visit(SliceIndices(SliceDir::Xy, 1));
    assert_eq!(indices.len(), 12);
    assert_eq!(indices, (12..24).collect::<Vec<_>>());
}

struct Neighbors<B>(Point3i, Neighborhood, B);

impl<B: BoundaryStrategy<i32>> DatasetVisitor for Neighbors<B> {
    type Output = Vec<i32>;

    fn visit<E: Element>(self, access: DataAccess<'_, E>) -> Vec<i32> {
        access
            .neighborhood(self.0, &self.1, ConvertingStrategy(self.2))
            .map(|v| v.lane(0).to_f64() as i32)
            .collect()
    }
}

/// Adapts an `i32`-valued strategy to whatever element type the dataset resolved to.
struct ConvertingStrategy<B>(B);

impl<E: Element, B: BoundaryStrategy<i32>> BoundaryStrategy<E> for ConvertingStrategy<B> {
    fn resolve(&self, grid: &RegularGrid3, p: Point3i) -> Resolved<E> {
        match self.0.resolve(grid, p) {
            Resolved::Inside(q) => Resolved::Inside(q),
            Resolved::Substitute(v) => Resolved::Substitute(cast_element(v)),
            Resolved::Skip => Resolved::Skip,
        }
    }
}

#[test]
fn moore_neighborhood_of_the_corner_voxel_with_a_sentinel() {
    let dataset = enumerated_dataset(Point3i::new(3, 3, 3));

    let got = dataset.visit(Neighbors(Point3i::ZERO, Neighborhood::moore(1), ConstantValue(-1)));

    assert_eq!(got.len(), 26);
    assert_eq!(got.iter().filter(|&&v| v == -1).count(), 19);
    let in_grid: Vec<i32> = got.into_iter().filter(|&v| v != -1).collect();
    assert_eq!(in_grid, vec![1, 3, 4, 9, 10, 12, 13]);
}

#[test]
fn wrapped_von_neumann_neighborhood_of_the_corner_voxel() {
    let dataset = enumerated_dataset(Point3i::new(3, 3, 3));

    let got = dataset.visit(Neighbors(Point3i::ZERO, Neighborhood::von_neumann(1), Wrap));

    assert_eq!(got, vec![18, 6, 2, 1, 3, 9]);
}

struct InterpolateAt(Point3f);

impl DatasetVisitor for InterpolateAt {
    type Output = Option<f64>;

    fn visit<E: Element>(self, access: DataAccess<'_, E>) -> Option<f64> {
        access
            .trilinear()
            .interpolate(self.0)
            .map(|v| v.lane(0).to_f64())
    }
}

#[test]
fn trilinear_is_exact_at_grid_points_and_flags_outside() {
    let grid = RegularGrid3::new(Point3i::new(4, 3, 2));
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let values: Vec<f64> = (0..grid.num_voxels())
        .map(|_| rng.gen_range(-100.0..100.0))
        .collect();
    let dataset = VolumeDataset::new(
        grid,
        ErasedStore::from(ValueStore::from_vec(values.clone())),
    )
    .unwrap();

    let map = grid.index_map();
    for (i, &v) in values.iter().enumerate() {
        let at = map.coords(i).as_float();
        assert_eq!(dataset.visit(InterpolateAt(at)), Some(v));
    }

    assert_eq!(dataset.visit(InterpolateAt(Point3f::new(3.5, 0.0, 0.0))), None);
    assert_eq!(dataset.visit(InterpolateAt(Point3f::fill(-0.1))), None);
}

#[test]
fn type_code_resolution_round_trip() {
    struct SampleOf;

    impl DatasetVisitor for SampleOf {
        type Output = StructuralSample;

        fn visit<E: Element>(self, _: DataAccess<'_, E>) -> StructuralSample {
            StructuralSample::of::<E>()
        }
    }

    let grid = RegularGrid3::new(Point3i::new(2, 2, 2));
    for code in 0..10u8 {
        for dim in 1..=4 {
            let sample = StructuralSample::from_type_code(code, dim).unwrap();
            let dataset = VolumeDataset::zeroed(grid, sample);

            assert_eq!(dataset.visit(SampleOf), sample);
        }
    }
}

#[test]
fn load_compute_store_pipeline() {
    // "Parse" a header: 2x2x2 grid of u16 scalars, then a payload of raw values.
    let grid = RegularGrid3::new(Point3i::new(2, 2, 2));
    let raw: Vec<u16> = vec![0, 10, 20, 30, 40, 50, 60, 70];
    let payload: Vec<u8> = bytemuck::cast_slice(&raw).to_vec();

    let input = VolumeDataset::from_type_code(grid, 2, 1, &payload).unwrap();
    assert_eq!(input.value_range(), (0.0, 70.0));

    // Compute a per-voxel output into a zero-filled f32 dataset, writing each result to its
    // own linear slot, the disjoint-index pattern parallel producers use.
    struct ReadAsF64;

    impl DatasetVisitor for ReadAsF64 {
        type Output = Vec<f64>;

        fn visit<E: Element>(self, access: DataAccess<'_, E>) -> Vec<f64> {
            access.voxels().map(|(_, v)| v.lane(0).to_f64()).collect()
        }
    }

    struct WriteHalved(Vec<f64>);

    impl DatasetVisitorMut for WriteHalved {
        type Output = ();

        fn visit<E: Element>(self, mut access: DataAccessMut<'_, E>) {
            for (i, v) in self.0.iter().enumerate() {
                let mut proxy = access.proxy_linear(i).unwrap();
                proxy.set(v / 2.0).unwrap();
            }
        }
    }

    let halved = input.visit(ReadAsF64);
    let mut output = VolumeDataset::zeroed(
        grid,
        StructuralSample::new(ScalarTypeId::F32, LaneCount::X1),
    );
    output.visit_mut(WriteHalved(halved));

    assert_eq!(output.value_range(), (0.0, 35.0));
}
