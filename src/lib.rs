pub mod configuration;

pub mod math {
    pub mod function {
        pub mod mathfunction;
        pub mod compositefunction;
        pub mod identityfunction;
        pub mod constantfunction;
        pub mod sqrfunction;
    }

    pub mod solver {
        pub mod solvererror;
        pub mod iterationoutcome;
        pub mod newtonmethodfunction;
        pub mod simpleiterationfunction;
    }

    pub mod tabulated {
        pub mod point;
        pub mod tabulatederror;
        pub mod validation;
        pub mod tabulatedfunction;
        pub mod arraytabulatedfunction;
        pub mod linkedlisttabulatedfunction;
        pub mod tabulatedfunctionfactory;
        pub mod unmodifiabletabulatedfunction;
    }

    pub mod operation {
        pub mod tabulatedfunctionoperationservice;
        pub mod tabulateddifferentialoperator;
    }
}
