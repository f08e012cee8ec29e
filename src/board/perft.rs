use super::{Move, Position};

impl Position {
    /// Per-depth successor tallies.
    ///
    /// Index `i` holds the number of positions exactly `i + 1` plies below
    /// `self`. Depth 0 yields an empty vector.
    pub fn perft(&mut self, depth: usize) -> Vec<u64> {
        let mut tallies = vec![0; depth];
        self.perft_tally(0, &mut tallies);
        tallies
    }

    fn perft_tally(&mut self, ply: usize, tallies: &mut [u64]) {
        if ply == tallies.len() {
            return;
        }
        let moves = self.legal_moves();
        tallies[ply] += moves.len() as u64;
        if ply + 1 == tallies.len() {
            return;
        }
        for mv in moves {
            let info = self.make_move(mv);
            self.perft_tally(ply + 1, tallies);
            self.unmake_move(mv, info);
        }
    }

    /// Leaf count at `depth`, bulk-counted at the last ply.
    pub fn perft_nodes(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft_nodes(depth - 1);
            self.unmake_move(mv, info);
        }

        nodes
    }

    /// Leaf count below each root move, for locating generator disagreements.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 {
            return Vec::new();
        }

        let mut divide = Vec::new();
        for mv in self.legal_moves() {
            let info = self.make_move(mv);
            let nodes = self.perft_nodes(depth - 1);
            self.unmake_move(mv, info);
            log::trace!("perft divide {mv}: {nodes}");
            divide.push((mv, nodes));
        }
        divide
    }
}
