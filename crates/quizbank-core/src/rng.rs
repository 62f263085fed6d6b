// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A minimal, zero-dependency, completely insecure PRNG to shuffle and
/// sample questions.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }

    // Generate random number in range [0, max).
    pub fn generate(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

pub fn shuffle<T>(v: Vec<T>, rng: &mut TinyRng) -> Vec<T> {
    let mut v = v;
    let len = v.len() as u32;
    for i in 0..len {
        let j = rng.generate(len);
        v.swap(i as usize, j as usize);
    }
    v
}

/// A uniform random sample of at most `n` elements: shuffle, then take `n`.
pub fn sample<T>(v: Vec<T>, n: usize, rng: &mut TinyRng) -> Vec<T> {
    let mut v = shuffle(v, rng);
    v.truncate(n);
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = TinyRng::from_seed(42);
        let v: Vec<u32> = (0..100).collect();
        let mut shuffled = shuffle(v, &mut rng);
        shuffled.sort();
        assert_eq!(shuffled, (0..100).collect::<Vec<u32>>());
    }

    #[test]
    fn test_sample_size() {
        let mut rng = TinyRng::from_seed(7);
        let v: Vec<u32> = (0..10).collect();
        assert_eq!(sample(v.clone(), 3, &mut rng).len(), 3);
        assert_eq!(sample(v.clone(), 10, &mut rng).len(), 10);
        assert_eq!(sample(v, 99, &mut rng).len(), 10);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let v: Vec<u32> = (0..20).collect();
        let mut rng_a = TinyRng::from_seed(123);
        let mut rng_b = TinyRng::from_seed(123);
        assert_eq!(
            sample(v.clone(), 5, &mut rng_a),
            sample(v, 5, &mut rng_b)
        );
    }
}
