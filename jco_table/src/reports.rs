use jco_core::ByteVec;

use crate::Table;

/// # Reports
impl Table {
    /// Adds the single number report for `a`, which is known as `name` in the
    /// labels: the number itself, its complement and negation, its population
    /// count, leading zero count and bitwidth, and its bit string, bit order,
    /// byte order, and nibble order reversals.
    pub fn one(&mut self, a: &ByteVec, name: &str) {
        let a = self.widen_operand(a);
        self.add(format!("{name} "), &a);
        self.add(format!("~{name} "), &a.not());
        self.add(format!("twos_complement({name})"), &a.twos_complement());
        self.add(format!("popcount({name})"), &a.popcount());
        self.add(format!("clz({name})"), &a.clz());
        self.add(format!("nbits({name})"), &a.nbits());
        self.add(format!("reverse_bitstring({name})"), &a.bitstring_reverse());
        self.add(format!("reverse_bitorder({name})"), &a.bit_reverse());
        self.add(format!("reverse_byteorder({name})"), &a.byte_reverse());
        self.add(format!("reverse_nibbleorder({name})"), &a.nibble_swap());
    }

    /// Adds the two number report for `a` and `b`, known as `name_a` and
    /// `name_b` in the labels. Shifts are not part of the report.
    pub fn two(&mut self, a: &ByteVec, b: &ByteVec, name_a: &str, name_b: &str) {
        let a = self.widen_operand(a);
        let b = self.widen_operand(b);
        self.add(format!("      {name_a}"), &a);
        self.add(format!("      {name_b}"), &b);

        self.add(format!("{name_a}  + {name_b}"), &a.add(&b));
        self.add(format!("{name_a}  | {name_b}"), &a.or(&b));
        self.add(format!("{name_a}  & {name_b}"), &a.and(&b));
        self.add(format!("{name_a}  ^ {name_b}"), &a.xor(&b));
        self.add(format!("{name_a} ^~ {name_b}"), &a.xor(&b.not()));

        self.add(format!("{name_a}  - {name_b}"), &a.subtract(&b));
        self.add(format!("{name_a} &~ {name_b}"), &a.and(&b.not()));
        self.add(format!("{name_b}  - {name_a}"), &b.subtract(&a));
        self.add(format!("{name_b} &~ {name_a}"), &b.and(&a.not()));
    }
}
